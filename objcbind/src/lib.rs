//! # objcbind
//!
//! Exposes managed indexer properties to Objective-C through object
//! subscripting.
//!
//! A managed indexer (`this[int i]`, `this[string key]`) becomes the
//! subscripting methods Objective-C lowers `obj[idx]` and `obj[key]` to.
//! Integer indexes use the indexed protocol, everything else the keyed one,
//! and element values cross the boundary boxed as `NSNumber` or passed
//! through as `id`.
//!
//! ## Quick Start
//!
//! ```
//! use objcbind::prelude::*;
//!
//! let indexer = PropertyDescriptor::read_write(TypeRef::int32(), TypeRef::double());
//! let out = generate_subscripts(&[indexer]).unwrap();
//!
//! assert_eq!(
//!     out.declarations.lines()[0],
//!     "- (id)objectAtIndexedSubscript:(int)idx;"
//! );
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - Managed type references and property descriptors
//! - [`codegen`] - Classification, marshalling, and emission

pub mod prelude;

/// Managed type references and property descriptors.
pub mod model {
    pub use objcbind_model::*;
}

/// Objective-C subscript generation.
pub mod codegen {
    pub use objcbind_codegen::*;
}

pub use objcbind_codegen::{
    CodegenConfig, CodegenError, OutputStreams, SubscriptGenerator, generate_subscripts,
};
pub use objcbind_model::{PropertyDescriptor, TypeRef};
