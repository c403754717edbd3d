//! Error types for building model values.

use thiserror::Error;

/// Error type for model construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An indexer was described with neither a read nor a write accessor.
    #[error("indexer property '{property}' has neither a getter nor a setter")]
    NoAccessors {
        /// Property name.
        property: String,
    },
}

impl ModelError {
    /// Creates a missing accessors error.
    pub fn no_accessors(property: impl Into<String>) -> Self {
        Self::NoAccessors {
            property: property.into(),
        }
    }
}
