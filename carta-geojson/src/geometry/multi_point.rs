//! MultiPoint geometry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::document::{bbox_member, GeometryDocument, GeometryRecord};
use crate::error::GeoJsonError;
use crate::geometry::{coordinates_array, BoundingBox, Coordinates, Geometry, GeometryType, Vertices};

/// A set of positions. May be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPoint {
    vertices: Vertices,
    /// Whether to include a `bbox` member when serializing.
    pub serialize_bbox: bool,
}

impl MultiPoint {
    /// Creates a multi point from already-validated vertices. Any count,
    /// including zero, is legal.
    pub fn from_vertices(vertices: Vertices) -> Self {
        Self {
            vertices,
            serialize_bbox: false,
        }
    }

    /// The vertices of the multi point.
    pub fn vertices(&self) -> Vertices {
        self.vertices.clone()
    }

    /// Bounding box of the multi point.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices)
    }

    /// Decodes a multi point from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, GeoJsonError> {
        match Geometry::from_json(json)? {
            Geometry::MultiPoint(multi_point) => Ok(multi_point),
            _ => Err(GeoJsonError::InvalidTypeField),
        }
    }

    /// Encodes the multi point as JSON.
    pub fn to_json(&self) -> Result<String, GeoJsonError> {
        Ok(serde_json::to_string(self)?)
    }

    pub(crate) fn from_coordinates(value: &Value) -> Result<Self, GeoJsonError> {
        let items = coordinates_array(value)?;

        let mut vertices = Vec::with_capacity(items.len());
        for item in items {
            vertices.push(Coordinates::from_value(item)?);
        }

        Ok(Self {
            vertices,
            serialize_bbox: false,
        })
    }
}

impl Serialize for MultiPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GeometryRecord {
            geometry_type: GeometryType::MultiPoint,
            coordinates: &self.vertices,
            bbox: bbox_member(self.serialize_bbox, || self.bounding_box()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MultiPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = GeometryDocument::deserialize(deserializer)?;
        match Geometry::from_document(&document).map_err(serde::de::Error::custom)? {
            Geometry::MultiPoint(multi_point) => Ok(multi_point),
            _ => Err(serde::de::Error::custom(GeoJsonError::InvalidTypeField)),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_multi_point_is_legal() {
        let multi_point = MultiPoint::default();
        assert!(multi_point.vertices().is_empty());
        assert!(multi_point.bounding_box().is_empty());
        assert_eq!(
            serde_json::to_value(&multi_point).unwrap(),
            json!({"type": "MultiPoint", "coordinates": []})
        );
    }

    #[test]
    fn empty_bbox_is_never_written() {
        let multi_point = MultiPoint {
            serialize_bbox: true,
            ..MultiPoint::default()
        };
        assert_eq!(
            serde_json::to_value(&multi_point).unwrap(),
            json!({"type": "MultiPoint", "coordinates": []})
        );
    }

    #[test]
    fn decode_validates_each_position() {
        let multi_point =
            MultiPoint::from_json(r#"{"type":"MultiPoint","coordinates":[[1,2],[3,4,5]]}"#)
                .unwrap();
        assert_eq!(
            multi_point.vertices(),
            vec![
                Coordinates::must(&[1.0, 2.0]),
                Coordinates::must(&[3.0, 4.0, 5.0]),
            ]
        );

        assert_matches!(
            MultiPoint::from_json(r#"{"type":"MultiPoint","coordinates":[[1,2],[3]]}"#),
            Err(GeoJsonError::CoordinatesSize)
        );
        assert_matches!(
            MultiPoint::from_json(r#"{"type":"MultiPoint","coordinates":[5]}"#),
            Err(GeoJsonError::InvalidCoordinates)
        );
    }

    #[test]
    fn json_round_trip() {
        let multi_point = MultiPoint::from_vertices(vec![
            Coordinates::must(&[1.0, 2.0]),
            Coordinates::must(&[3.0, 4.0, 5.0]),
        ]);
        let json = multi_point.to_json().unwrap();
        assert_eq!(MultiPoint::from_json(&json).unwrap(), multi_point);
    }
}
