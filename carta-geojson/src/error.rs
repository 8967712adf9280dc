//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
///
/// Validating constructors and decode steps return the first violation they
/// encounter; no partially constructed value ever accompanies an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoJsonError {
    /// The input is not a well-formed JSON document of the expected shape.
    #[error("malformed JSON document: {0}")]
    Json(String),

    /// A coordinates array does not have 2 or 3 elements.
    #[error("coordinates must have 2 or 3 elements")]
    CoordinatesSize,

    /// A longitude value is out of range.
    #[error("longitude must be between -180 and 180")]
    LongitudeRange,

    /// A latitude value is out of range.
    #[error("latitude must be between -90 and 90")]
    LatitudeRange,

    /// The `coordinates` member is missing or not the expected array nesting.
    #[error("invalid or missing coordinates")]
    InvalidCoordinates,

    /// The `type` member is missing or names no known geometry.
    #[error("invalid or missing type field")]
    InvalidTypeField,

    /// A line string has fewer than 2 vertices.
    #[error("line string must have at least 2 vertices")]
    LineStringTooShort,

    /// A multi line string has no segments at all.
    #[error("multi line string must have at least one segment")]
    MultiLineStringEmpty,

    /// An empty vertex list was given where vertices are required.
    #[error("vertices cannot be empty")]
    VerticesEmpty,

    /// A polygon has no rings at all.
    #[error("polygon must have at least one linear ring")]
    PolygonRingCount,

    /// A linear ring has fewer than 4 coordinates.
    #[error("linear ring must have at least 4 coordinates")]
    LinearRingSize,

    /// A linear ring's first and last coordinates differ.
    #[error("linear ring must be closed")]
    LinearRingNotClosed,

    /// An empty geometry envelope was used where a geometry is required.
    #[error("geometry is not defined")]
    GeometryNotDefined,

    /// A geometry envelope was narrowed to a variant it does not hold.
    #[error("geometry type mismatch")]
    GeometryTypeMismatch,

    /// A coordinate builder was invoked on a geometry collection.
    #[error("geometry collection does not have coordinates to build")]
    GeometryCollectionCoordinates,

    /// The top-level object tag is unrecognized or the document holds no
    /// feature.
    #[error("invalid feature type or format")]
    InvalidFeature,

    /// A feature identifier is neither a string nor a number.
    #[error("invalid ID: unexpected type or format")]
    InvalidId,

    /// A property key is empty.
    #[error("property key cannot be empty")]
    KeyEmpty,

    /// A property is not present in the map.
    #[error("property not found")]
    PropertyNotFound,

    /// A property is present but is not a string.
    #[error("property is not a string")]
    PropertyNotString,

    /// A property is present but is not an integer.
    #[error("property is not an integer")]
    PropertyNotInt,

    /// A property is present but is not a float.
    #[error("property is not a float")]
    PropertyNotFloat,

    /// A property is present but is not a boolean.
    #[error("property is not a boolean")]
    PropertyNotBool,
}

impl From<serde_json::Error> for GeoJsonError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}
