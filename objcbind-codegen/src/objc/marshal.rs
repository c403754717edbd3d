//! Boxing and unboxing expressions between scalars and `NSNumber`.
//!
//! Numeric scalars cross the subscript boundary as `NSNumber` instances;
//! strings and objects are already `id` and pass through untouched.

use crate::error::{CodegenError, DEFAULT_ISSUES_URL};
use objcbind_model::{ScalarKind, TypeRef};

/// Returns the `NSNumber` initializer and accessor for a numeric kind.
///
/// Both selectors name the same C type, so unboxing a boxed value yields the
/// original value. `None` for kinds that are already objects.
const fn number_selectors(kind: ScalarKind) -> Option<(&'static str, &'static str)> {
    match kind {
        ScalarKind::Bool => Some(("initWithBool", "boolValue")),
        ScalarKind::Int8 => Some(("initWithChar", "charValue")),
        ScalarKind::UInt8 => Some(("initWithUnsignedChar", "unsignedCharValue")),
        ScalarKind::Int16 => Some(("initWithShort", "shortValue")),
        ScalarKind::UInt16 | ScalarKind::Char16 => {
            Some(("initWithUnsignedShort", "unsignedShortValue"))
        }
        ScalarKind::Int32 => Some(("initWithInt", "intValue")),
        ScalarKind::UInt32 => Some(("initWithUnsignedInt", "unsignedIntValue")),
        ScalarKind::Int64 => Some(("initWithLongLong", "longLongValue")),
        ScalarKind::UInt64 => Some(("initWithUnsignedLongLong", "unsignedLongLongValue")),
        ScalarKind::Float32 => Some(("initWithFloat", "floatValue")),
        ScalarKind::Float64 => Some(("initWithDouble", "doubleValue")),
        ScalarKind::StringOrObject => None,
    }
}

/// Wraps a native scalar expression into an object expression.
#[must_use]
pub fn to_boxed(kind: ScalarKind, expr: &str) -> String {
    match number_selectors(kind) {
        Some((init, _)) => format!("[[NSNumber alloc] {}: {}]", init, expr),
        None => expr.to_string(),
    }
}

/// Extracts a native scalar expression from an object expression.
#[must_use]
pub fn from_boxed(kind: ScalarKind, expr: &str) -> String {
    match number_selectors(kind) {
        Some((_, accessor)) => format!("[{} {}]", expr, accessor),
        None => expr.to_string(),
    }
}

/// Resolves the scalar kind of `ty` for marshalling.
///
/// `issues_url` is quoted in the error so the defect can be reported.
///
/// # Errors
/// Returns [`CodegenError::UnsupportedScalarKind`] if `ty` has no scalar kind.
pub fn marshal_kind(ty: &TypeRef, issues_url: &str) -> Result<ScalarKind, CodegenError> {
    ty.scalar_kind()
        .ok_or_else(|| CodegenError::unsupported_subscript_type(&ty.full_name, issues_url))
}

/// Boxes an expression of managed type `ty`.
///
/// # Errors
/// Returns [`CodegenError::UnsupportedScalarKind`] if `ty` has no scalar kind.
pub fn box_value(ty: &TypeRef, expr: &str) -> Result<String, CodegenError> {
    Ok(to_boxed(marshal_kind(ty, DEFAULT_ISSUES_URL)?, expr))
}

/// Unboxes an object expression into managed type `ty`.
///
/// # Errors
/// Returns [`CodegenError::UnsupportedScalarKind`] if `ty` has no scalar kind.
pub fn unbox_value(ty: &TypeRef, expr: &str) -> Result<String, CodegenError> {
    Ok(from_boxed(marshal_kind(ty, DEFAULT_ISSUES_URL)?, expr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UNEXPECTED_SUBSCRIPT_TYPE;

    /// A value as held by a C variable.
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Value {
        Int(i128),
        Float(f64),
        Bool(bool),
    }

    /// Converts `value` the way assigning it to the C type named by an
    /// `NSNumber` selector suffix would.
    fn to_c_type(suffix: &str, value: Value) -> Value {
        let wide = match value {
            Value::Int(v) => v,
            Value::Float(v) => v as i128,
            Value::Bool(v) => i128::from(v),
        };
        let as_float = match value {
            Value::Float(v) => v,
            Value::Int(v) => v as f64,
            Value::Bool(v) => f64::from(u8::from(v)),
        };
        match suffix {
            "Bool" | "bool" => Value::Bool(wide != 0 || as_float != 0.0),
            "Char" | "char" => Value::Int(i128::from(wide as i8)),
            "UnsignedChar" | "unsignedChar" => Value::Int(i128::from(wide as u8)),
            "Short" | "short" => Value::Int(i128::from(wide as i16)),
            "UnsignedShort" | "unsignedShort" => Value::Int(i128::from(wide as u16)),
            "Int" | "int" => Value::Int(i128::from(wide as i32)),
            "UnsignedInt" | "unsignedInt" => Value::Int(i128::from(wide as u32)),
            "LongLong" | "longLong" => Value::Int(i128::from(wide as i64)),
            "UnsignedLongLong" | "unsignedLongLong" => Value::Int(i128::from(wide as u64)),
            "Float" | "float" => Value::Float(f64::from(as_float as f32)),
            "Double" | "double" => Value::Float(as_float),
            other => panic!("unmodelled NSNumber selector suffix {other}"),
        }
    }

    /// Evaluates `[[[NSNumber alloc] initWithX: v] yValue]` for a value `v`.
    fn eval_round_trip(expr: &str, v: Value) -> Value {
        let rest = expr
            .strip_prefix("[[[NSNumber alloc] initWith")
            .expect("boxing initializer");
        let (init_suffix, rest) = rest.split_once(": v] ").expect("boxed operand");
        let accessor_suffix = rest.strip_suffix("Value]").expect("unboxing accessor");
        to_c_type(accessor_suffix, to_c_type(init_suffix, v))
    }

    fn samples(kind: ScalarKind) -> Vec<Value> {
        fn ints(min: i128, max: i128) -> Vec<Value> {
            vec![
                Value::Int(min),
                Value::Int(max),
                Value::Int(0),
                Value::Int(max / 3),
            ]
        }
        match kind {
            ScalarKind::Bool => vec![Value::Bool(false), Value::Bool(true)],
            ScalarKind::Int8 => ints(i8::MIN.into(), i8::MAX.into()),
            ScalarKind::UInt8 => ints(0, u8::MAX.into()),
            ScalarKind::Int16 => ints(i16::MIN.into(), i16::MAX.into()),
            ScalarKind::UInt16 | ScalarKind::Char16 => ints(0, u16::MAX.into()),
            ScalarKind::Int32 => ints(i32::MIN.into(), i32::MAX.into()),
            ScalarKind::UInt32 => ints(0, u32::MAX.into()),
            ScalarKind::Int64 => ints(i64::MIN.into(), i64::MAX.into()),
            ScalarKind::UInt64 => ints(0, u64::MAX.into()),
            ScalarKind::Float32 => vec![
                Value::Float(f64::from(f32::MIN)),
                Value::Float(f64::from(f32::MAX)),
                Value::Float(0.0),
                Value::Float(f64::from(1234.5678_f32)),
            ],
            ScalarKind::Float64 => vec![
                Value::Float(f64::MIN),
                Value::Float(f64::MAX),
                Value::Float(0.0),
                Value::Float(-98765.4321),
            ],
            ScalarKind::StringOrObject => Vec::new(),
        }
    }

    #[test]
    fn test_round_trip_numeric_kinds() {
        for kind in ScalarKind::ALL.into_iter().filter(ScalarKind::is_numeric) {
            let expr = from_boxed(kind, &to_boxed(kind, "v"));
            for v in samples(kind) {
                assert_eq!(eval_round_trip(&expr, v), v, "{kind:?}: {expr}");
            }
        }
    }

    #[test]
    fn test_round_trip_detects_width_mismatch() {
        let narrowed = "[[[NSNumber alloc] initWithInt: v] shortValue]";
        assert_ne!(
            eval_round_trip(narrowed, Value::Int(i128::from(i32::MAX))),
            Value::Int(i128::from(i32::MAX))
        );
    }

    #[test]
    fn test_to_boxed_expressions() {
        assert_eq!(
            to_boxed(ScalarKind::Int32, "[self getItem:idx]"),
            "[[NSNumber alloc] initWithInt: [self getItem:idx]]"
        );
        assert_eq!(
            to_boxed(ScalarKind::Float64, "x"),
            "[[NSNumber alloc] initWithDouble: x]"
        );
        assert_eq!(
            to_boxed(ScalarKind::Char16, "c"),
            "[[NSNumber alloc] initWithUnsignedShort: c]"
        );
        assert_eq!(
            to_boxed(ScalarKind::UInt64, "n"),
            "[[NSNumber alloc] initWithUnsignedLongLong: n]"
        );
    }

    #[test]
    fn test_from_boxed_expressions() {
        assert_eq!(from_boxed(ScalarKind::Bool, "obj"), "[obj boolValue]");
        assert_eq!(from_boxed(ScalarKind::Int8, "obj"), "[obj charValue]");
        assert_eq!(
            from_boxed(ScalarKind::UInt64, "obj"),
            "[obj unsignedLongLongValue]"
        );
        assert_eq!(
            from_boxed(ScalarKind::Char16, "obj"),
            from_boxed(ScalarKind::UInt16, "obj")
        );
    }

    #[test]
    fn test_string_or_object_pass_through() {
        for expr in ["obj", "[self getItem:key]", "", "@\"literal\""] {
            assert_eq!(to_boxed(ScalarKind::StringOrObject, expr), expr);
            assert_eq!(from_boxed(ScalarKind::StringOrObject, expr), expr);
        }
    }

    #[test]
    fn test_type_level_marshalling() {
        assert_eq!(
            box_value(&TypeRef::string(), "s").unwrap(),
            "s".to_string()
        );
        assert_eq!(
            unbox_value(&TypeRef::int16(), "obj").unwrap(),
            "[obj shortValue]"
        );
    }

    #[test]
    fn test_unsupported_type_fails() {
        for ty in [
            TypeRef::named("System.Decimal"),
            TypeRef::named("System.DateTime"),
            TypeRef::named("System.DBNull"),
        ] {
            let err = box_value(&ty, "x").unwrap_err();
            assert_eq!(err.code(), UNEXPECTED_SUBSCRIPT_TYPE);
            assert!(err.to_string().contains(&ty.full_name));
            assert!(err.to_string().contains("subscript generation"));

            let err = unbox_value(&ty, "x").unwrap_err();
            assert_eq!(
                err,
                CodegenError::unsupported_subscript_type(&ty.full_name, DEFAULT_ISSUES_URL)
            );
        }
    }

    #[test]
    fn test_marshal_kind_quotes_issues_url() {
        let ty = TypeRef::named("System.Decimal");
        let err = marshal_kind(&ty, "https://bugs.example.invalid").unwrap_err();
        assert!(err.to_string().contains("(https://bugs.example.invalid)"));
        assert_eq!(
            marshal_kind(&TypeRef::uint16(), "unused"),
            Ok(ScalarKind::UInt16)
        );
    }
}
