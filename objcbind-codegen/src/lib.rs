//! # objcbind Codegen
//!
//! Objective-C subscript generation for managed indexer properties.
//!
//! This crate provides:
//! - Classification of indexers into indexed or keyed subscripting
//! - `NSNumber` boxing and unboxing expressions for managed scalars
//! - Header declaration and implementation emission for subscript methods
//!
//! Generation is synchronous. A pass owns one [`OutputStreams`] pair and
//! lends it to one property at a time.

pub mod classify;
pub mod config;
pub mod error;
pub mod generator;
pub mod objc;
pub mod writer;

pub use classify::{Classification, SubscriptProtocol, classify};
pub use config::CodegenConfig;
pub use error::CodegenError;
pub use generator::SubscriptGenerator;
pub use writer::{OutputStreams, SourceWriter};

use objcbind_model::PropertyDescriptor;

/// Generates subscripting methods for a set of indexers with default settings.
///
/// # Arguments
/// * `descriptors` - Indexer properties, in emission order
///
/// # Returns
/// The declaration and definition streams.
///
/// # Errors
/// Returns `CodegenError` if any element type cannot be marshalled.
pub fn generate_subscripts(
    descriptors: &[PropertyDescriptor],
) -> Result<OutputStreams, CodegenError> {
    SubscriptGenerator::default().generate_all(descriptors)
}
