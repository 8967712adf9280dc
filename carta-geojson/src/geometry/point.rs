//! Point geometry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::document::{bbox_member, GeometryDocument, GeometryRecord};
use crate::error::GeoJsonError;
use crate::geometry::{BoundingBox, Coordinates, Geometry, GeometryType, Vertices};

/// A single position.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coordinates: Coordinates,
    /// Whether to include a `bbox` member when serializing.
    pub serialize_bbox: bool,
}

impl Point {
    /// Creates a point from a `[longitude, latitude]` or
    /// `[longitude, latitude, altitude]` slice.
    pub fn new(values: &[f64]) -> Result<Self, GeoJsonError> {
        Ok(Self {
            coordinates: Coordinates::new(values)?,
            serialize_bbox: false,
        })
    }

    /// Same as [`Point::new`] but panics on invalid input.
    pub fn must(values: &[f64]) -> Self {
        match Self::new(values) {
            Ok(point) => point,
            Err(e) => panic!("invalid point: {e}"),
        }
    }

    /// Longitude of the point.
    pub fn longitude(&self) -> f64 {
        self.coordinates.longitude()
    }

    /// Latitude of the point.
    pub fn latitude(&self) -> f64 {
        self.coordinates.latitude()
    }

    /// Altitude of the point, if it has one.
    pub fn altitude(&self) -> Option<f64> {
        self.coordinates.altitude()
    }

    /// Whether the point carries an altitude.
    pub fn has_altitude(&self) -> bool {
        self.coordinates.has_altitude()
    }

    /// The position of the point.
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// The point's position as a one-element vertex list.
    pub fn vertices(&self) -> Vertices {
        vec![self.coordinates.clone()]
    }

    /// Bounding box of the point; it collapses to the point itself.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices())
    }

    /// Decodes a point from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, GeoJsonError> {
        match Geometry::from_json(json)? {
            Geometry::Point(point) => Ok(point),
            _ => Err(GeoJsonError::InvalidTypeField),
        }
    }

    /// Encodes the point as JSON.
    pub fn to_json(&self) -> Result<String, GeoJsonError> {
        Ok(serde_json::to_string(self)?)
    }

    pub(crate) fn from_coordinates(value: &Value) -> Result<Self, GeoJsonError> {
        Ok(Self {
            coordinates: Coordinates::from_value(value)?,
            serialize_bbox: false,
        })
    }
}

impl From<Coordinates> for Point {
    fn from(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            serialize_bbox: false,
        }
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GeometryRecord {
            geometry_type: GeometryType::Point,
            coordinates: &self.coordinates,
            bbox: bbox_member(self.serialize_bbox, || self.bounding_box()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = GeometryDocument::deserialize(deserializer)?;
        match Geometry::from_document(&document).map_err(serde::de::Error::custom)? {
            Geometry::Point(point) => Ok(point),
            _ => Err(serde::de::Error::custom(GeoJsonError::InvalidTypeField)),
        }
    }
}
