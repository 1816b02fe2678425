//! Structural converter
//!
//! Walks a [`Shape`](super::shape::Shape) field by field to turn a typed
//! structure into a document mapping and back.
//!
//! Encoding rules:
//! - omit-empty fields holding a zero value are skipped
//! - inlined structures are flattened into the parent mapping
//! - sequences keep their order, mappings are emitted sorted by key
//!
//! Decoding rules:
//! - keys with no matching field are ignored
//! - fields whose key is absent keep their current value
//! - `null` resets the field to its zero value

use serde_json::{Map, Value};

use super::shape::{FieldMode, FieldPath, FieldValue, Structured};
use crate::error::Result;

/// Encode a structure into a document mapping.
pub fn encode_struct(value: &dyn Structured) -> Map<String, Value> {
    let mut out = Map::new();
    encode_into(value, &mut out);
    out
}

fn encode_into(value: &dyn Structured, out: &mut Map<String, Value>) {
    let shape = value.shape();
    for (field, slot) in shape.fields.iter().zip(value.fields()) {
        if field.mode == FieldMode::Inline {
            if let Some(inner) = slot.as_structured() {
                encode_into(inner, out);
                continue;
            }
        }
        if field.mode == FieldMode::OmitEmpty && slot.is_zero() {
            continue;
        }
        out.insert(field.key.to_string(), slot.encode());
    }
}

/// Assign a document value to a structure. The value must be a mapping.
pub fn assign_struct(target: &mut dyn Structured, value: &Value, path: &FieldPath) -> Result<()> {
    match value {
        Value::Object(map) => decode_into(target, map, path),
        other => Err(path.mismatch(target.shape().name, other)),
    }
}

/// Decode a document mapping into a structure.
pub fn decode_struct(target: &mut dyn Structured, map: &Map<String, Value>) -> Result<()> {
    decode_into(target, map, &FieldPath::root())
}

fn decode_into(target: &mut dyn Structured, map: &Map<String, Value>, path: &FieldPath) -> Result<()> {
    let shape = target.shape();
    for (field, slot) in shape.fields.iter().zip(target.fields_mut()) {
        if field.mode == FieldMode::Inline {
            if let Some(inner) = slot.as_structured_mut() {
                decode_into(inner, map, path)?;
                continue;
            }
        }
        let Some(value) = map.get(field.key) else {
            continue;
        };
        assign_value(slot, value, &path.key(field.key))?;
    }
    Ok(())
}

/// Assign a document value to any field, mapping `null` to the zero value.
pub fn assign_value(slot: &mut dyn FieldValue, value: &Value, path: &FieldPath) -> Result<()> {
    if value.is_null() {
        slot.clear();
        return Ok(());
    }
    slot.assign(value, path)
}
