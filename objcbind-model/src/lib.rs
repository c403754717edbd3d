//! # objcbind Model
//!
//! Input model shared by the objcbind generators.
//!
//! This crate provides:
//! - Managed type references and their runtime type codes
//! - The closed set of scalar kinds that can cross the boxing boundary
//! - Indexer property descriptors and their access capability
//! - Native (Objective-C) type name resolution

pub mod error;
pub mod names;
pub mod property;
pub mod types;

pub use error::ModelError;
pub use names::{ObjCTypeNames, TypeNameResolver};
pub use property::{Capability, PropertyDescriptor};
pub use types::{ScalarKind, TypeCode, TypeRef};
