//! Property values as stored in a document
//!
//! Numbers keep their exact `f64`, including NaN and the infinities, whether
//! they arrive as a BSON double or as extended JSON
//! (`{"$numberDouble": "NaN"}`). An explicit `null` is kept apart from an
//! absent field.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

const EXTENDED_NUMBER_KEYS: [&str; 4] =
    ["$numberDouble", "$numberInt", "$numberLong", "$numberDecimal"];

/// A single stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PropertyValue {
    /// Field not present in the document
    #[default]
    Absent,
    /// Field present and `null`
    Null,
    /// Any numeric value
    Number(f64),
    /// Anything else (string, bool, array, sub-document)
    Other(Value),
}

impl PropertyValue {
    /// Numeric value, if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether the field was missing from the document
    pub fn is_absent(&self) -> bool {
        matches!(self, PropertyValue::Absent)
    }

    /// Lossy JSON form; non-finite numbers become `null`
    pub fn into_json(self) -> Value {
        match self {
            PropertyValue::Absent | PropertyValue::Null => Value::Null,
            PropertyValue::Number(value) => Value::from(value),
            PropertyValue::Other(value) => value,
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PropertyValueVisitor)
    }
}

struct PropertyValueVisitor;

impl<'de> Visitor<'de> for PropertyValueVisitor {
    type Value = PropertyValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any document value")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<PropertyValue, E> {
        Ok(PropertyValue::Number(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<PropertyValue, E> {
        Ok(PropertyValue::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<PropertyValue, E> {
        Ok(PropertyValue::Number(value as f64))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<PropertyValue, E> {
        Ok(PropertyValue::Other(Value::Bool(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<PropertyValue, E> {
        Ok(PropertyValue::Other(Value::String(value.to_string())))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<PropertyValue, E> {
        Ok(PropertyValue::Other(Value::String(value)))
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<PropertyValue, E> {
        Ok(PropertyValue::Other(Value::Array(
            value.iter().map(|byte| Value::from(*byte)).collect(),
        )))
    }

    fn visit_unit<E: de::Error>(self) -> Result<PropertyValue, E> {
        Ok(PropertyValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<PropertyValue, E> {
        Ok(PropertyValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<PropertyValue, D::Error> {
        PropertyValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<PropertyValue, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<PropertyValue>()? {
            items.push(item.into_json());
        }
        Ok(PropertyValue::Other(Value::Array(items)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PropertyValue, A::Error> {
        let mut entries = Map::new();
        while let Some((key, value)) = map.next_entry::<String, PropertyValue>()? {
            entries.insert(key, value.into_json());
        }
        Ok(from_extended_json(entries))
    }
}

/// `{"$numberDouble": "..."}` and friends are numbers; other maps are kept
fn from_extended_json(entries: Map<String, Value>) -> PropertyValue {
    if entries.len() == 1 {
        if let Some((key, Value::String(text))) = entries.iter().next() {
            if EXTENDED_NUMBER_KEYS.contains(&key.as_str()) {
                if let Some(number) = parse_extended_number(text) {
                    return PropertyValue::Number(number);
                }
            }
        }
    }
    PropertyValue::Other(Value::Object(entries))
}

fn parse_extended_number(text: &str) -> Option<f64> {
    match text {
        "NaN" => Some(f64::NAN),
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => text.parse().ok(),
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Absent | PropertyValue::Null => serializer.serialize_unit(),
            PropertyValue::Number(value) if value.is_finite() => serializer.serialize_f64(*value),
            PropertyValue::Number(value) => {
                let text = if value.is_nan() {
                    "NaN"
                } else if *value > 0.0 {
                    "Infinity"
                } else {
                    "-Infinity"
                };
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$numberDouble", text)?;
                map.end()
            }
            PropertyValue::Other(value) => value.serialize(serializer),
        }
    }
}
