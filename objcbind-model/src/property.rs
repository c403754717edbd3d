//! Indexer property descriptors.

use crate::error::ModelError;
use crate::types::TypeRef;

/// Which accessors an indexer exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Getter only.
    ReadOnly,
    /// Setter only.
    WriteOnly,
    /// Getter and setter.
    ReadWrite,
}

impl Capability {
    /// Derives the capability from accessor presence.
    ///
    /// Returns `None` when neither accessor exists.
    #[must_use]
    pub const fn from_accessors(has_read: bool, has_write: bool) -> Option<Self> {
        match (has_read, has_write) {
            (true, false) => Some(Self::ReadOnly),
            (false, true) => Some(Self::WriteOnly),
            (true, true) => Some(Self::ReadWrite),
            (false, false) => None,
        }
    }

    /// Returns true if a getter exists.
    #[must_use]
    pub const fn can_read(&self) -> bool {
        matches!(self, Self::ReadOnly | Self::ReadWrite)
    }

    /// Returns true if a setter exists.
    #[must_use]
    pub const fn can_write(&self) -> bool {
        matches!(self, Self::WriteOnly | Self::ReadWrite)
    }
}

/// A managed indexer property, as discovered by assembly traversal.
///
/// The index type is the setter's first parameter when a setter exists and
/// the getter's index parameter otherwise. When both accessors exist the
/// producer guarantees they agree, so a single index type is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    name: String,
    has_read: bool,
    has_write: bool,
    index_type: TypeRef,
    element_type: TypeRef,
}

impl PropertyDescriptor {
    /// Creates a descriptor.
    ///
    /// # Errors
    /// Returns [`ModelError::NoAccessors`] if neither accessor is present.
    pub fn new(
        name: impl Into<String>,
        has_read: bool,
        has_write: bool,
        index_type: TypeRef,
        element_type: TypeRef,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if !has_read && !has_write {
            return Err(ModelError::no_accessors(name));
        }
        Ok(Self {
            name,
            has_read,
            has_write,
            index_type,
            element_type,
        })
    }

    /// Creates a getter-only `Item` indexer.
    #[must_use]
    pub fn read_only(index_type: TypeRef, element_type: TypeRef) -> Self {
        Self::item(true, false, index_type, element_type)
    }

    /// Creates a setter-only `Item` indexer.
    #[must_use]
    pub fn write_only(index_type: TypeRef, element_type: TypeRef) -> Self {
        Self::item(false, true, index_type, element_type)
    }

    /// Creates an `Item` indexer with both accessors.
    #[must_use]
    pub fn read_write(index_type: TypeRef, element_type: TypeRef) -> Self {
        Self::item(true, true, index_type, element_type)
    }

    fn item(has_read: bool, has_write: bool, index_type: TypeRef, element_type: TypeRef) -> Self {
        Self {
            name: "Item".to_string(),
            has_read,
            has_write,
            index_type,
            element_type,
        }
    }

    /// Property name (`Item` for default C# indexers).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if a getter exists.
    #[must_use]
    pub const fn has_read(&self) -> bool {
        self.has_read
    }

    /// Returns true if a setter exists.
    #[must_use]
    pub const fn has_write(&self) -> bool {
        self.has_write
    }

    /// Index parameter type.
    #[must_use]
    pub const fn index_type(&self) -> &TypeRef {
        &self.index_type
    }

    /// Element (property) type.
    #[must_use]
    pub const fn element_type(&self) -> &TypeRef {
        &self.element_type
    }

    /// Accessor capability.
    ///
    /// Every constructor rejects a descriptor without accessors, so the
    /// `ReadWrite` fallback is never taken.
    #[must_use]
    pub fn capability(&self) -> Capability {
        Capability::from_accessors(self.has_read, self.has_write).unwrap_or(Capability::ReadWrite)
    }
}
