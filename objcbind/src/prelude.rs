//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use objcbind::prelude::*;
//! ```

// Model types
pub use objcbind_model::{
    Capability, ModelError, ObjCTypeNames, PropertyDescriptor, ScalarKind, TypeCode,
    TypeNameResolver, TypeRef,
};

// Generation
pub use objcbind_codegen::objc::{box_value, from_boxed, to_boxed, unbox_value};
pub use objcbind_codegen::{
    Classification, CodegenConfig, CodegenError, OutputStreams, SourceWriter, SubscriptGenerator,
    SubscriptProtocol, classify, generate_subscripts,
};
