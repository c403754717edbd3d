//! Error types for code generation.

use objcbind_model::ModelError;
use thiserror::Error;

/// Diagnostic code reported for an unexpected type in subscript generation.
pub const UNEXPECTED_SUBSCRIPT_TYPE: u32 = 99;

/// Diagnostic code reported for an invalid model value relayed from upstream.
pub const INVALID_MODEL: u32 = 98;

/// Generation step named in subscript diagnostics.
pub const SUBSCRIPT_GENERATION: &str = "subscript generation";

/// Default location for reporting generator defects.
pub const DEFAULT_ISSUES_URL: &str = "https://github.com/mono/Embeddinator-4000/issues";

/// Error type for code generation operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// A type reached marshalling that has no boxing rule.
    ///
    /// This is a generator defect: upstream traversal let through a type the
    /// marshaller cannot convert.
    #[error(
        "Internal error `unexpected type {type_name} in {step}`. Please file a bug report with a test case ({issues_url})"
    )]
    UnsupportedScalarKind {
        /// Offending managed type.
        type_name: String,
        /// Generation step that hit the type.
        step: &'static str,
        /// Where the defect should be reported.
        issues_url: String,
    },

    /// Model construction error relayed from `objcbind-model`.
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl CodegenError {
    /// Creates an unsupported type error for subscript generation.
    pub fn unsupported_subscript_type(
        type_name: impl Into<String>,
        issues_url: impl Into<String>,
    ) -> Self {
        Self::UnsupportedScalarKind {
            type_name: type_name.into(),
            step: SUBSCRIPT_GENERATION,
            issues_url: issues_url.into(),
        }
    }

    /// Returns the numeric diagnostic code.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::UnsupportedScalarKind { .. } => UNEXPECTED_SUBSCRIPT_TYPE,
            Self::Model(_) => INVALID_MODEL,
        }
    }
}
