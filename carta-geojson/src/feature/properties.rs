//! Free-form feature metadata.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::GeoJsonError;

/// String-keyed metadata of a feature.
///
/// Values are arbitrary JSON; the typed getters fail with
/// [`GeoJsonError::PropertyNotFound`] for missing keys and with the
/// type-specific error when the value has a different type. Serializes as
/// `null` when empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Map<String, Value>);

impl Properties {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a value to the given key, replacing any previous value.
    /// Fails when the key is empty.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<(), GeoJsonError> {
        if key.is_empty() {
            return Err(GeoJsonError::KeyEmpty);
        }

        self.0.insert(key.to_owned(), value.into());
        Ok(())
    }

    /// The raw value for the given key, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The value for the given key as a string.
    pub fn get_string(&self, key: &str) -> Result<&str, GeoJsonError> {
        let value = self.0.get(key).ok_or(GeoJsonError::PropertyNotFound)?;
        value.as_str().ok_or(GeoJsonError::PropertyNotString)
    }

    /// The value for the given key as an integer.
    ///
    /// Any JSON number is accepted; fractional values truncate toward zero.
    pub fn get_i64(&self, key: &str) -> Result<i64, GeoJsonError> {
        let value = self.0.get(key).ok_or(GeoJsonError::PropertyNotFound)?;
        let number = value.as_f64().ok_or(GeoJsonError::PropertyNotInt)?;
        Ok(number as i64)
    }

    /// The value for the given key as a float.
    pub fn get_f64(&self, key: &str) -> Result<f64, GeoJsonError> {
        let value = self.0.get(key).ok_or(GeoJsonError::PropertyNotFound)?;
        value.as_f64().ok_or(GeoJsonError::PropertyNotFloat)
    }

    /// The value for the given key as a boolean.
    pub fn get_bool(&self, key: &str) -> Result<bool, GeoJsonError> {
        let value = self.0.get(key).ok_or(GeoJsonError::PropertyNotFound)?;
        value.as_bool().ok_or(GeoJsonError::PropertyNotBool)
    }

    /// Number of properties in the map.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Properties {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            serializer.serialize_none()
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Option::<Map<String, Value>>::deserialize(deserializer)?;
        Ok(Self(map.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn sample() -> Properties {
        let mut properties = Properties::new();
        properties.set("name", "Tokyo").unwrap();
        properties.set("population", 13_960_000).unwrap();
        properties.set("density", 6402.6).unwrap();
        properties.set("capital", true).unwrap();
        properties
    }

    #[test]
    fn set_rejects_empty_keys() {
        let mut properties = Properties::new();
        assert_matches!(properties.set("", 1), Err(GeoJsonError::KeyEmpty));
        assert!(properties.is_empty());
    }

    #[test]
    fn typed_getters() {
        let properties = sample();
        assert_eq!(properties.get_string("name").unwrap(), "Tokyo");
        assert_eq!(properties.get_i64("population").unwrap(), 13_960_000);
        assert_eq!(properties.get_f64("density").unwrap(), 6402.6);
        assert!(properties.get_bool("capital").unwrap());
        assert_eq!(properties.get("name"), Some(&json!("Tokyo")));
        assert_eq!(properties.len(), 4);
    }

    #[test]
    fn missing_keys_and_type_mismatches() {
        let properties = sample();
        assert_matches!(
            properties.get_string("missing"),
            Err(GeoJsonError::PropertyNotFound)
        );
        assert_matches!(
            properties.get_string("capital"),
            Err(GeoJsonError::PropertyNotString)
        );
        assert_matches!(
            properties.get_i64("name"),
            Err(GeoJsonError::PropertyNotInt)
        );
        assert_matches!(
            properties.get_f64("capital"),
            Err(GeoJsonError::PropertyNotFloat)
        );
        assert_matches!(
            properties.get_bool("density"),
            Err(GeoJsonError::PropertyNotBool)
        );
    }

    #[test]
    fn integers_truncate_toward_zero() {
        let mut properties = Properties::new();
        properties.set("ratio", 1.9).unwrap();
        properties.set("offset", -1.9).unwrap();
        assert_eq!(properties.get_i64("ratio").unwrap(), 1);
        assert_eq!(properties.get_i64("offset").unwrap(), -1);
    }

    #[test]
    fn empty_map_serializes_as_null() {
        assert_eq!(
            serde_json::to_value(Properties::new()).unwrap(),
            Value::Null
        );

        let properties: Properties = serde_json::from_str("null").unwrap();
        assert!(properties.is_empty());
    }

    #[test]
    fn serde_round_trip() {
        let properties = sample();
        let json = serde_json::to_string(&properties).unwrap();
        assert_eq!(serde_json::from_str::<Properties>(&json).unwrap(), properties);
    }
}
