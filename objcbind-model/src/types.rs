//! Managed type definitions.
//!
//! This module contains the managed runtime's type codes, the type references
//! handed over by assembly traversal, and the scalar kinds the generators know
//! how to box and unbox.

use std::fmt;

/// Managed runtime type codes.
///
/// Every managed type reports exactly one code. Reference types that are not
/// strings (classes, interfaces, generic instances) report [`TypeCode::Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// Null reference.
    Empty,
    /// Any reference or value type not covered by another code.
    Object,
    /// Database null.
    DBNull,
    /// Boolean value.
    Boolean,
    /// UTF-16 code unit.
    Char,
    /// Signed 8-bit integer.
    SByte,
    /// Unsigned 8-bit integer.
    Byte,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    UInt64,
    /// 32-bit floating point.
    Single,
    /// 64-bit floating point.
    Double,
    /// 128-bit decimal.
    Decimal,
    /// Date and time value.
    DateTime,
    /// Immutable UTF-16 string.
    String,
}

impl TypeCode {
    /// Returns the code name as reported by the managed runtime.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Object => "Object",
            Self::DBNull => "DBNull",
            Self::Boolean => "Boolean",
            Self::Char => "Char",
            Self::SByte => "SByte",
            Self::Byte => "Byte",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
            Self::DateTime => "DateTime",
            Self::String => "String",
        }
    }

    /// Determines the type code of a fully qualified managed type name.
    ///
    /// Names outside the `System` primitives map to [`TypeCode::Object`].
    #[must_use]
    pub fn from_full_name(full_name: &str) -> Self {
        match full_name {
            "System.DBNull" => Self::DBNull,
            "System.Boolean" => Self::Boolean,
            "System.Char" => Self::Char,
            "System.SByte" => Self::SByte,
            "System.Byte" => Self::Byte,
            "System.Int16" => Self::Int16,
            "System.UInt16" => Self::UInt16,
            "System.Int32" => Self::Int32,
            "System.UInt32" => Self::UInt32,
            "System.Int64" => Self::Int64,
            "System.UInt64" => Self::UInt64,
            "System.Single" => Self::Single,
            "System.Double" => Self::Double,
            "System.Decimal" => Self::Decimal,
            "System.DateTime" => Self::DateTime,
            "System.String" => Self::String,
            _ => Self::Object,
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reference to a managed type, as produced by assembly traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    /// Fully qualified managed name (e.g. `System.Int32`).
    pub full_name: String,
    /// Runtime type code.
    pub code: TypeCode,
}

impl TypeRef {
    /// Creates a type reference with an explicit code.
    #[must_use]
    pub fn new(full_name: impl Into<String>, code: TypeCode) -> Self {
        Self {
            full_name: full_name.into(),
            code,
        }
    }

    /// Creates a type reference, deriving the code from the full name.
    #[must_use]
    pub fn named(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let code = TypeCode::from_full_name(&full_name);
        Self { full_name, code }
    }

    /// Creates an opaque reference type (classes, interfaces, generics).
    #[must_use]
    pub fn object(full_name: impl Into<String>) -> Self {
        Self::new(full_name, TypeCode::Object)
    }

    /// `System.Boolean`.
    #[must_use]
    pub fn boolean() -> Self {
        Self::new("System.Boolean", TypeCode::Boolean)
    }

    /// `System.Char`.
    #[must_use]
    pub fn char() -> Self {
        Self::new("System.Char", TypeCode::Char)
    }

    /// `System.SByte`.
    #[must_use]
    pub fn sbyte() -> Self {
        Self::new("System.SByte", TypeCode::SByte)
    }

    /// `System.Byte`.
    #[must_use]
    pub fn byte() -> Self {
        Self::new("System.Byte", TypeCode::Byte)
    }

    /// `System.Int16`.
    #[must_use]
    pub fn int16() -> Self {
        Self::new("System.Int16", TypeCode::Int16)
    }

    /// `System.UInt16`.
    #[must_use]
    pub fn uint16() -> Self {
        Self::new("System.UInt16", TypeCode::UInt16)
    }

    /// `System.Int32`.
    #[must_use]
    pub fn int32() -> Self {
        Self::new("System.Int32", TypeCode::Int32)
    }

    /// `System.UInt32`.
    #[must_use]
    pub fn uint32() -> Self {
        Self::new("System.UInt32", TypeCode::UInt32)
    }

    /// `System.Int64`.
    #[must_use]
    pub fn int64() -> Self {
        Self::new("System.Int64", TypeCode::Int64)
    }

    /// `System.UInt64`.
    #[must_use]
    pub fn uint64() -> Self {
        Self::new("System.UInt64", TypeCode::UInt64)
    }

    /// `System.Single`.
    #[must_use]
    pub fn single() -> Self {
        Self::new("System.Single", TypeCode::Single)
    }

    /// `System.Double`.
    #[must_use]
    pub fn double() -> Self {
        Self::new("System.Double", TypeCode::Double)
    }

    /// `System.String`.
    #[must_use]
    pub fn string() -> Self {
        Self::new("System.String", TypeCode::String)
    }

    /// Returns the scalar kind of this type, if it has one.
    #[must_use]
    pub const fn scalar_kind(&self) -> Option<ScalarKind> {
        ScalarKind::from_type_code(self.code)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// Scalar kinds that can be boxed into, and unboxed from, the native
/// generic object representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Boolean.
    Bool,
    /// Signed 8-bit integer.
    Int8,
    /// Unsigned 8-bit integer.
    UInt8,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    UInt64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// UTF-16 code unit.
    Char16,
    /// Strings and opaque objects, already in object form.
    StringOrObject,
}

impl ScalarKind {
    /// All scalar kinds, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Bool,
        Self::Int8,
        Self::UInt8,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Float32,
        Self::Float64,
        Self::Char16,
        Self::StringOrObject,
    ];

    /// Classifies a type code. Returns `None` for unsupported codes.
    #[must_use]
    pub const fn from_type_code(code: TypeCode) -> Option<Self> {
        match code {
            TypeCode::Boolean => Some(Self::Bool),
            TypeCode::SByte => Some(Self::Int8),
            TypeCode::Byte => Some(Self::UInt8),
            TypeCode::Int16 => Some(Self::Int16),
            TypeCode::UInt16 => Some(Self::UInt16),
            TypeCode::Int32 => Some(Self::Int32),
            TypeCode::UInt32 => Some(Self::UInt32),
            TypeCode::Int64 => Some(Self::Int64),
            TypeCode::UInt64 => Some(Self::UInt64),
            TypeCode::Single => Some(Self::Float32),
            TypeCode::Double => Some(Self::Float64),
            TypeCode::Char => Some(Self::Char16),
            TypeCode::String | TypeCode::Object => Some(Self::StringOrObject),
            TypeCode::Empty | TypeCode::DBNull | TypeCode::Decimal | TypeCode::DateTime => None,
        }
    }

    /// Returns true for the pure integer kinds (booleans and characters excluded).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::UInt8
                | Self::Int16
                | Self::UInt16
                | Self::Int32
                | Self::UInt32
                | Self::Int64
                | Self::UInt64
        )
    }

    /// Returns true if values of this kind need boxing to become objects.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self, Self::StringOrObject)
    }
}
