//! [`FieldValue`] implementations for scalars and collections.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

use super::convert::assign_value;
use super::shape::{FieldKind, FieldPath, FieldType, FieldValue, ScalarKind};
use crate::error::Result;

impl FieldValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn clear(&mut self) {
        String::clear(self);
    }

    fn encode(&self) -> Value {
        Value::String(self.clone())
    }

    fn assign(&mut self, value: &Value, path: &FieldPath) -> Result<()> {
        match value {
            Value::String(s) => {
                *self = s.clone();
                Ok(())
            }
            other => Err(path.mismatch(ScalarKind::String.type_name(), other)),
        }
    }
}

impl FieldType for String {
    const KIND: FieldKind = FieldKind::Scalar(ScalarKind::String);
}

impl FieldValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }

    fn clear(&mut self) {
        *self = false;
    }

    fn encode(&self) -> Value {
        Value::Bool(*self)
    }

    fn assign(&mut self, value: &Value, path: &FieldPath) -> Result<()> {
        match value {
            Value::Bool(b) => {
                *self = *b;
                Ok(())
            }
            other => Err(path.mismatch(ScalarKind::Bool.type_name(), other)),
        }
    }
}

impl FieldType for bool {
    const KIND: FieldKind = FieldKind::Scalar(ScalarKind::Bool);
}

/// Read an integral number. Floats are accepted only without a fractional part.
fn integral(value: &Value, path: &FieldPath, kind: ScalarKind) -> Result<i64> {
    let Value::Number(number) = value else {
        return Err(path.mismatch(kind.type_name(), value));
    };
    if let Some(i) = number.as_i64() {
        return Ok(i);
    }
    if number.is_u64() {
        return Err(path.mismatch_described(kind.type_name(), format!("out-of-range number {number}")));
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        Some(f) if f.fract() == 0.0 => {
            Err(path.mismatch_described(kind.type_name(), format!("out-of-range number {number}")))
        }
        _ => Err(path.mismatch_described(kind.type_name(), format!("fractional number {number}"))),
    }
}

impl FieldValue for i64 {
    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn clear(&mut self) {
        *self = 0;
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }

    fn assign(&mut self, value: &Value, path: &FieldPath) -> Result<()> {
        *self = integral(value, path, ScalarKind::Int64)?;
        Ok(())
    }
}

impl FieldType for i64 {
    const KIND: FieldKind = FieldKind::Scalar(ScalarKind::Int64);
}

impl FieldValue for i32 {
    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn clear(&mut self) {
        *self = 0;
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }

    fn assign(&mut self, value: &Value, path: &FieldPath) -> Result<()> {
        let wide = integral(value, path, ScalarKind::Int32)?;
        *self = i32::try_from(wide).map_err(|_| {
            path.mismatch_described(ScalarKind::Int32.type_name(), format!("out-of-range number {wide}"))
        })?;
        Ok(())
    }
}

impl FieldType for i32 {
    const KIND: FieldKind = FieldKind::Scalar(ScalarKind::Int32);
}

impl FieldValue for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn clear(&mut self) {
        *self = 0.0;
    }

    // Non-finite values have no JSON representation.
    fn encode(&self) -> Value {
        Number::from_f64(*self).map(Value::Number).unwrap_or(Value::Null)
    }

    fn assign(&mut self, value: &Value, path: &FieldPath) -> Result<()> {
        match value.as_f64() {
            Some(f) => {
                *self = f;
                Ok(())
            }
            None => Err(path.mismatch(ScalarKind::Float64.type_name(), value)),
        }
    }
}

impl FieldType for f64 {
    const KIND: FieldKind = FieldKind::Scalar(ScalarKind::Float64);
}

impl<T: FieldType> FieldValue for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn encode(&self) -> Value {
        Value::Array(self.iter().map(FieldValue::encode).collect())
    }

    fn assign(&mut self, value: &Value, path: &FieldPath) -> Result<()> {
        let Value::Array(items) = value else {
            return Err(path.mismatch(Self::KIND.type_name(), value));
        };
        let mut decoded = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let mut slot = T::default();
            assign_value(&mut slot, item, &path.index(index))?;
            decoded.push(slot);
        }
        *self = decoded;
        Ok(())
    }
}

impl<T: FieldType> FieldType for Vec<T> {
    const KIND: FieldKind = FieldKind::List(T::kind);
}

impl<T: FieldType> FieldValue for BTreeMap<String, T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    fn encode(&self) -> Value {
        let mut out = Map::new();
        for (key, value) in self {
            out.insert(key.clone(), value.encode());
        }
        Value::Object(out)
    }

    fn assign(&mut self, value: &Value, path: &FieldPath) -> Result<()> {
        let Value::Object(entries) = value else {
            return Err(path.mismatch(Self::KIND.type_name(), value));
        };
        let mut decoded = BTreeMap::new();
        for (key, entry) in entries {
            let mut slot = T::default();
            assign_value(&mut slot, entry, &path.entry(key))?;
            decoded.insert(key.clone(), slot);
        }
        *self = decoded;
        Ok(())
    }
}

impl<T: FieldType> FieldType for BTreeMap<String, T> {
    const KIND: FieldKind = FieldKind::Map(T::kind);
}

impl<T: FieldType> FieldValue for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn clear(&mut self) {
        *self = None;
    }

    fn encode(&self) -> Value {
        match self {
            Some(inner) => inner.encode(),
            None => Value::Null,
        }
    }

    fn assign(&mut self, value: &Value, path: &FieldPath) -> Result<()> {
        let mut inner = T::default();
        inner.assign(value, path)?;
        *self = Some(inner);
        Ok(())
    }
}

impl<T: FieldType> FieldType for Option<T> {
    const KIND: FieldKind = FieldKind::Optional(T::kind);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    fn assign<T: FieldType>(value: Value) -> Result<T> {
        let mut slot = T::default();
        assign_value(&mut slot, &value, &FieldPath::root().key("field"))?;
        Ok(slot)
    }

    #[test]
    fn test_integers_accept_integral_values() {
        assert_eq!(assign::<i64>(json!(42)).unwrap(), 42);
        assert_eq!(assign::<i64>(json!(-7)).unwrap(), -7);
        assert_eq!(assign::<i32>(json!(3.0)).unwrap(), 3);
    }

    #[test]
    fn test_fractional_integer_is_a_mismatch() {
        let err = assign::<i64>(json!(1.5)).unwrap_err();
        match err {
            Error::TypeMismatch { path, expected, found } => {
                assert_eq!(path, "field");
                assert_eq!(expected, "int64");
                assert!(found.contains("fractional"), "found: {found}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_int32_range_is_enforced() {
        assert!(matches!(
            assign::<i32>(json!(i64::from(i32::MAX) + 1)),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(assign::<i64>(json!(u64::MAX)), Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn test_scalar_shape_mismatch() {
        assert!(matches!(assign::<String>(json!(["a"])), Err(Error::TypeMismatch { .. })));
        assert!(matches!(assign::<bool>(json!("true")), Err(Error::TypeMismatch { .. })));
        assert!(matches!(assign::<Vec<String>>(json!("a")), Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn test_null_resets_to_zero() {
        assert_eq!(assign::<String>(Value::Null).unwrap(), "");
        assert_eq!(assign::<Option<i64>>(Value::Null).unwrap(), None);
        assert!(assign::<Vec<String>>(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_collection_paths_in_errors() {
        let err = assign::<Vec<i64>>(json!([1, "two"])).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { ref path, .. } if path == "field[1]"));

        let err = assign::<BTreeMap<String, bool>>(json!({"a": true, "b": 1})).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { ref path, .. } if path == "field[b]"));
    }

    #[test]
    fn test_map_encoding_is_sorted() {
        let mut tags = BTreeMap::new();
        tags.insert("zone".to_string(), "a".to_string());
        tags.insert("env".to_string(), "prod".to_string());
        let encoded = tags.encode();
        let keys: Vec<&String> = encoded.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["env", "zone"]);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(<Vec<String>>::KIND.type_name(), "[]string");
        assert_eq!(<BTreeMap<String, i64>>::KIND.type_name(), "map[string]int64");
        assert_eq!(<Option<bool>>::KIND.type_name(), "*bool");
    }
}
