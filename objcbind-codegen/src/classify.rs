//! Subscript protocol classification.

use objcbind_model::{Capability, PropertyDescriptor, ScalarKind, TypeRef};

/// Subscripting protocol an indexer maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptProtocol {
    /// Array-like access by integer position.
    Indexed,
    /// Dictionary-like access by object key.
    Keyed,
}

/// Result of classifying one indexer property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    /// Subscripting protocol.
    pub protocol: SubscriptProtocol,
    /// Accessors to emit.
    pub capability: Capability,
    /// Scalar kind of the index, `None` if unsupported.
    pub index_kind: Option<ScalarKind>,
    /// Element type, marshalled per accessor.
    pub element_type: &'a TypeRef,
}

/// Classifies an indexer property.
///
/// Total over all inputs: integer indexes select [`SubscriptProtocol::Indexed`]
/// and every other index type, unsupported ones included, falls back to
/// [`SubscriptProtocol::Keyed`].
#[must_use]
pub fn classify(descriptor: &PropertyDescriptor) -> Classification<'_> {
    let index_kind = descriptor.index_type().scalar_kind();
    let protocol = match index_kind {
        Some(kind) if kind.is_integer() => SubscriptProtocol::Indexed,
        _ => SubscriptProtocol::Keyed,
    };

    Classification {
        protocol,
        capability: descriptor.capability(),
        index_kind,
        element_type: descriptor.element_type(),
    }
}
