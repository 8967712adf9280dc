//! Feature identifiers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::GeoJsonError;

/// Identifier of a feature: a string or a number, per the wire format.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureId {
    /// String identifier.
    String(String),
    /// Numeric identifier.
    Number(f64),
}

impl FeatureId {
    /// The string value, if this is a string identifier.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            Self::Number(_) => None,
        }
    }

    /// The numeric value, if this is a numeric identifier.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::String(_) => None,
            Self::Number(value) => Some(*value),
        }
    }

    pub(crate) fn from_value(value: &Value) -> Result<Self, GeoJsonError> {
        match value {
            Value::String(string) => Ok(Self::String(string.clone())),
            Value::Number(number) => number
                .as_f64()
                .map(Self::Number)
                .ok_or(GeoJsonError::InvalidId),
            _ => Err(GeoJsonError::InvalidId),
        }
    }
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for FeatureId {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for FeatureId {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl Serialize for FeatureId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(value) => serializer.serialize_str(value),
            Self::Number(value) => serializer.serialize_f64(*value),
        }
    }
}

impl<'de> Deserialize<'de> for FeatureId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}
