//! Native type name resolution.

use crate::types::{TypeCode, TypeRef};

/// Converts managed types into their native source spelling.
pub trait TypeNameResolver {
    /// Returns the native spelling of `ty`, suitable for parameter types.
    fn type_name(&self, ty: &TypeRef) -> String;
}

/// Default Objective-C spellings for managed primitives.
///
/// Anything that is not a primitive or a string is spelled `id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjCTypeNames;

impl ObjCTypeNames {
    /// Returns the spelling for a type code.
    #[must_use]
    pub const fn for_code(code: TypeCode) -> &'static str {
        match code {
            TypeCode::Boolean => "bool",
            TypeCode::Char => "unichar",
            TypeCode::SByte => "signed char",
            TypeCode::Byte => "unsigned char",
            TypeCode::Int16 => "short",
            TypeCode::UInt16 => "unsigned short",
            TypeCode::Int32 => "int",
            TypeCode::UInt32 => "unsigned int",
            TypeCode::Int64 => "long long",
            TypeCode::UInt64 => "unsigned long long",
            TypeCode::Single => "float",
            TypeCode::Double => "double",
            TypeCode::String => "NSString *",
            TypeCode::Empty
            | TypeCode::Object
            | TypeCode::DBNull
            | TypeCode::Decimal
            | TypeCode::DateTime => "id",
        }
    }
}

impl TypeNameResolver for ObjCTypeNames {
    fn type_name(&self, ty: &TypeRef) -> String {
        Self::for_code(ty.code).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objc_integer_spellings() {
        let names = ObjCTypeNames;
        assert_eq!(names.type_name(&TypeRef::sbyte()), "signed char");
        assert_eq!(names.type_name(&TypeRef::byte()), "unsigned char");
        assert_eq!(names.type_name(&TypeRef::int16()), "short");
        assert_eq!(names.type_name(&TypeRef::uint16()), "unsigned short");
        assert_eq!(names.type_name(&TypeRef::int32()), "int");
        assert_eq!(names.type_name(&TypeRef::uint32()), "unsigned int");
        assert_eq!(names.type_name(&TypeRef::int64()), "long long");
        assert_eq!(names.type_name(&TypeRef::uint64()), "unsigned long long");
    }

    #[test]
    fn test_objc_other_spellings() {
        let names = ObjCTypeNames;
        assert_eq!(names.type_name(&TypeRef::boolean()), "bool");
        assert_eq!(names.type_name(&TypeRef::char()), "unichar");
        assert_eq!(names.type_name(&TypeRef::double()), "double");
        assert_eq!(names.type_name(&TypeRef::string()), "NSString *");
        assert_eq!(names.type_name(&TypeRef::object("Foo.Bar")), "id");
    }
}
