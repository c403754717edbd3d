//! # objcbind Bench
//!
//! Benchmark fixtures for objcbind code generation.

use objcbind_model::{PropertyDescriptor, TypeRef};

/// Returns one read-write indexer per supported index and element pairing.
///
/// Index types alternate between every integer width and string keys, and
/// element types cycle through every boxable scalar.
#[must_use]
pub fn indexer_fixtures() -> Vec<PropertyDescriptor> {
    let indexes = [
        TypeRef::sbyte(),
        TypeRef::byte(),
        TypeRef::int16(),
        TypeRef::uint16(),
        TypeRef::int32(),
        TypeRef::uint32(),
        TypeRef::int64(),
        TypeRef::uint64(),
        TypeRef::string(),
    ];
    let elements = [
        TypeRef::boolean(),
        TypeRef::char(),
        TypeRef::sbyte(),
        TypeRef::byte(),
        TypeRef::int16(),
        TypeRef::uint16(),
        TypeRef::int32(),
        TypeRef::uint32(),
        TypeRef::int64(),
        TypeRef::uint64(),
        TypeRef::single(),
        TypeRef::double(),
        TypeRef::string(),
        TypeRef::object("Contoso.Widget"),
    ];

    let mut fixtures = Vec::with_capacity(indexes.len() * elements.len());
    for index in &indexes {
        for element in &elements {
            fixtures.push(PropertyDescriptor::read_write(index.clone(), element.clone()));
        }
    }
    fixtures
}
