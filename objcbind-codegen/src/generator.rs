//! Subscript generation driver.

use crate::classify::{Classification, classify};
use crate::config::CodegenConfig;
use crate::error::CodegenError;
use crate::objc::SubscriptEmitter;
use crate::writer::OutputStreams;
use objcbind_model::{ObjCTypeNames, PropertyDescriptor, TypeNameResolver};

/// Generates subscripting methods for indexer properties.
pub struct SubscriptGenerator {
    config: CodegenConfig,
    names: Box<dyn TypeNameResolver>,
}

impl SubscriptGenerator {
    /// Creates a generator using the default Objective-C type names.
    #[must_use]
    pub fn new(config: CodegenConfig) -> Self {
        Self::with_resolver(config, ObjCTypeNames)
    }

    /// Creates a generator with a custom type name resolver.
    #[must_use]
    pub fn with_resolver(config: CodegenConfig, names: impl TypeNameResolver + 'static) -> Self {
        Self {
            config,
            names: Box::new(names),
        }
    }

    /// Returns the generator configuration.
    #[must_use]
    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Creates an empty stream pair formatted for this generator.
    #[must_use]
    pub fn streams(&self) -> OutputStreams {
        OutputStreams::new(self.config.indent_unit())
    }

    /// Generates the subscript of one indexer into `out`.
    ///
    /// `out` must not be shared with another property while this runs; the
    /// exclusive borrow keeps the appended order equal to the call order.
    ///
    /// # Errors
    /// Returns [`CodegenError::UnsupportedScalarKind`] if the element type
    /// cannot be marshalled. `out` is left unchanged in that case. The failure
    /// is logged here, once, with the property name.
    pub fn generate<'d>(
        &self,
        descriptor: &'d PropertyDescriptor,
        out: &mut OutputStreams,
    ) -> Result<Classification<'d>, CodegenError> {
        let class = classify(descriptor);
        tracing::debug!(
            "Subscript {} [{}] -> {}: {:?} {:?}",
            descriptor.name(),
            descriptor.index_type(),
            descriptor.element_type(),
            class.protocol,
            class.capability
        );

        SubscriptEmitter::new(&self.config, self.names.as_ref())
            .emit(descriptor, &class, out)
            .inspect_err(|e| {
                tracing::error!("Subscript generation failed for {}: {}", descriptor.name(), e);
            })?;
        Ok(class)
    }

    /// Generates every descriptor, in order, into a fresh stream pair.
    ///
    /// # Errors
    /// Stops at the first descriptor that fails and returns its error.
    pub fn generate_all(
        &self,
        descriptors: &[PropertyDescriptor],
    ) -> Result<OutputStreams, CodegenError> {
        let mut out = self.streams();
        for descriptor in descriptors {
            self.generate(descriptor, &mut out)?;
        }
        Ok(out)
    }
}

impl Default for SubscriptGenerator {
    fn default() -> Self {
        Self::new(CodegenConfig::default())
    }
}
