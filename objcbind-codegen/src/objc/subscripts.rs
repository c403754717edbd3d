//! Objective-C subscripting method generation.
//!
//! Indexers become the object subscripting methods the compiler lowers
//! `obj[idx]` and `obj[key]` to:
//!
//! | protocol | getter | setter |
//! |----------|--------|--------|
//! | indexed  | `objectAtIndexedSubscript:` | `setObject:atIndexedSubscript:` |
//! | keyed    | `objectForKeyedSubscript:`  | `setObject:forKeyedSubscript:`  |

use crate::classify::{Classification, SubscriptProtocol};
use crate::config::CodegenConfig;
use crate::error::CodegenError;
use crate::objc::marshal::{from_boxed, marshal_kind, to_boxed};
use crate::writer::OutputStreams;
use objcbind_model::{PropertyDescriptor, ScalarKind, TypeNameResolver};

const INDEX_PARAM: &str = "idx";
const KEY_PARAM: &str = "key";
const VALUE_PARAM: &str = "obj";

/// One subscripting method: its signature and single body statement.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SubscriptMethod {
    signature: String,
    statement: String,
}

/// Generator for the subscripting methods of one indexer.
pub struct SubscriptEmitter<'a> {
    config: &'a CodegenConfig,
    names: &'a dyn TypeNameResolver,
}

impl<'a> SubscriptEmitter<'a> {
    /// Creates a new subscript emitter.
    #[must_use]
    pub fn new(config: &'a CodegenConfig, names: &'a dyn TypeNameResolver) -> Self {
        Self { config, names }
    }

    /// Emits the declarations and definitions for `descriptor`.
    ///
    /// The getter is emitted before the setter. Each accessor contributes one
    /// declaration line and one definition block, appended together.
    ///
    /// # Errors
    /// Returns [`CodegenError::UnsupportedScalarKind`] if the element type
    /// cannot be boxed. Nothing is appended to `out` in that case.
    pub fn emit(
        &self,
        descriptor: &PropertyDescriptor,
        class: &Classification<'_>,
        out: &mut OutputStreams,
    ) -> Result<(), CodegenError> {
        let element = marshal_kind(class.element_type, self.config.bug_report_url())?;
        let mut staged = OutputStreams::new(self.config.indent_unit());

        if class.capability.can_read() {
            let method = self.getter(descriptor, class.protocol, element);
            self.write_method(&mut staged, &method);
        }
        if class.capability.can_write() {
            let method = self.setter(descriptor, class.protocol, element);
            self.write_method(&mut staged, &method);
        }

        out.commit(staged);
        Ok(())
    }

    /// Builds the subscript getter.
    fn getter(
        &self,
        descriptor: &PropertyDescriptor,
        protocol: SubscriptProtocol,
        element: ScalarKind,
    ) -> SubscriptMethod {
        let (signature, param) = match protocol {
            SubscriptProtocol::Indexed => (
                format!(
                    "- (id)objectAtIndexedSubscript:({}){}",
                    self.index_type_name(descriptor),
                    INDEX_PARAM
                ),
                INDEX_PARAM,
            ),
            SubscriptProtocol::Keyed => (
                format!("- (id)objectForKeyedSubscript:(id){}", KEY_PARAM),
                KEY_PARAM,
            ),
        };
        let read = format!("[self get{}:{}]", descriptor.name(), param);

        SubscriptMethod {
            signature,
            statement: format!("return {};", to_boxed(element, &read)),
        }
    }

    /// Builds the subscript setter.
    fn setter(
        &self,
        descriptor: &PropertyDescriptor,
        protocol: SubscriptProtocol,
        element: ScalarKind,
    ) -> SubscriptMethod {
        let (signature, param) = match protocol {
            SubscriptProtocol::Indexed => (
                format!(
                    "- (void)setObject:(id){} atIndexedSubscript:({}){}",
                    VALUE_PARAM,
                    self.index_type_name(descriptor),
                    INDEX_PARAM
                ),
                INDEX_PARAM,
            ),
            SubscriptProtocol::Keyed => (
                format!(
                    "- (void)setObject:(id){} forKeyedSubscript:(id){}",
                    VALUE_PARAM, KEY_PARAM
                ),
                KEY_PARAM,
            ),
        };

        SubscriptMethod {
            signature,
            statement: format!(
                "[self set{}:{} value:{}];",
                descriptor.name(),
                param,
                from_boxed(element, VALUE_PARAM)
            ),
        }
    }

    fn index_type_name(&self, descriptor: &PropertyDescriptor) -> String {
        self.names.type_name(descriptor.index_type())
    }

    /// Writes the declaration and the definition of one method.
    fn write_method(&self, out: &mut OutputStreams, method: &SubscriptMethod) {
        tracing::trace!("Emitting {}", method.signature);

        out.declarations.write_line(&format!("{};", method.signature));

        let body = &mut out.definitions;
        body.write_line(&method.signature);
        body.write_line("{");
        body.indent();
        body.write_line(&method.statement);
        body.dedent();
        body.write_line("}");
        if self.config.separates_definitions() {
            body.blank_line();
        }
    }
}
