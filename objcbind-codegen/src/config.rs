//! Generator configuration.

use crate::error::DEFAULT_ISSUES_URL;

/// Formatting and diagnostic options for emitted source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    indent: String,
    blank_line_after_definition: bool,
    issues_url: String,
}

impl CodegenConfig {
    /// Creates a configuration with default settings.
    ///
    /// Defaults: four-space indentation, one blank line after each definition,
    /// [`DEFAULT_ISSUES_URL`] in fatal diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self {
            indent: "    ".to_string(),
            blank_line_after_definition: true,
            issues_url: DEFAULT_ISSUES_URL.to_string(),
        }
    }

    /// Sets the string written once per indentation level.
    #[must_use]
    pub fn indent(mut self, unit: impl Into<String>) -> Self {
        self.indent = unit.into();
        self
    }

    /// Sets whether a blank line separates consecutive definitions.
    #[must_use]
    pub fn blank_line_after_definition(mut self, enabled: bool) -> Self {
        self.blank_line_after_definition = enabled;
        self
    }

    /// Sets the bug-report URL quoted in fatal generation errors.
    #[must_use]
    pub fn issues_url(mut self, url: impl Into<String>) -> Self {
        self.issues_url = url.into();
        self
    }

    /// Indentation unit.
    #[must_use]
    pub fn indent_unit(&self) -> &str {
        &self.indent
    }

    /// Whether definitions are followed by a blank line.
    #[must_use]
    pub const fn separates_definitions(&self) -> bool {
        self.blank_line_after_definition
    }

    /// Bug-report URL for fatal diagnostics.
    #[must_use]
    pub fn bug_report_url(&self) -> &str {
        &self.issues_url
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self::new()
    }
}
