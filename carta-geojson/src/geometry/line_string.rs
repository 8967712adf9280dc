//! LineString geometry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::document::{bbox_member, GeometryDocument, GeometryRecord};
use crate::error::GeoJsonError;
use crate::geometry::{coordinates_array, BoundingBox, Coordinates, Geometry, GeometryType, Vertices};

/// Minimum number of vertices in a valid line string.
pub const LINE_STRING_MINIMUM_SIZE: usize = 2;

/// An ordered run of two or more positions.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    vertices: Vertices,
    /// Whether to include a `bbox` member when serializing.
    pub serialize_bbox: bool,
}

impl LineString {
    /// Creates a line string from the given vertices. Fails when fewer than
    /// [`LINE_STRING_MINIMUM_SIZE`] vertices are given.
    pub fn new(vertices: Vertices) -> Result<Self, GeoJsonError> {
        if vertices.len() < LINE_STRING_MINIMUM_SIZE {
            return Err(GeoJsonError::LineStringTooShort);
        }

        Ok(Self {
            vertices,
            serialize_bbox: false,
        })
    }

    /// Same as [`LineString::new`] but panics on invalid input.
    pub fn must(vertices: Vertices) -> Self {
        match Self::new(vertices) {
            Ok(line_string) => line_string,
            Err(e) => panic!("invalid line string: {e}"),
        }
    }

    /// The vertices of the line string.
    pub fn vertices(&self) -> Vertices {
        self.vertices.clone()
    }

    /// Bounding box of the line string.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices)
    }

    /// Decodes a line string from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, GeoJsonError> {
        match Geometry::from_json(json)? {
            Geometry::LineString(line_string) => Ok(line_string),
            _ => Err(GeoJsonError::InvalidTypeField),
        }
    }

    /// Encodes the line string as JSON.
    pub fn to_json(&self) -> Result<String, GeoJsonError> {
        Ok(serde_json::to_string(self)?)
    }

    pub(crate) fn from_coordinates(value: &Value) -> Result<Self, GeoJsonError> {
        let items = coordinates_array(value)?;

        if items.len() < LINE_STRING_MINIMUM_SIZE {
            return Err(GeoJsonError::LineStringTooShort);
        }

        let mut vertices = Vec::with_capacity(items.len());
        for item in items {
            vertices.push(Coordinates::from_value(item)?);
        }

        Ok(Self {
            vertices,
            serialize_bbox: false,
        })
    }

    pub(crate) fn into_vertices(self) -> Vertices {
        self.vertices
    }
}

impl Serialize for LineString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GeometryRecord {
            geometry_type: GeometryType::LineString,
            coordinates: &self.vertices,
            bbox: bbox_member(self.serialize_bbox, || self.bounding_box()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LineString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = GeometryDocument::deserialize(deserializer)?;
        match Geometry::from_document(&document).map_err(serde::de::Error::custom)? {
            Geometry::LineString(line_string) => Ok(line_string),
            _ => Err(serde::de::Error::custom(GeoJsonError::InvalidTypeField)),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn vertices(values: &[&[f64]]) -> Vertices {
        values.iter().map(|v| Coordinates::must(v)).collect()
    }

    #[test]
    fn requires_two_vertices() {
        assert_matches!(
            LineString::new(vec![Coordinates::must(&[10.0, 20.0])]),
            Err(GeoJsonError::LineStringTooShort)
        );
        assert_matches!(LineString::new(vec![]), Err(GeoJsonError::LineStringTooShort));

        let line_string =
            LineString::new(vertices(&[&[10.0, 20.0], &[30.0, 40.0]])).unwrap();
        assert_eq!(line_string.vertices().len(), 2);
    }

    #[test]
    fn decode_checks_length_before_vertices() {
        assert_matches!(
            LineString::from_json(r#"{"type":"LineString","coordinates":[[10,20]]}"#),
            Err(GeoJsonError::LineStringTooShort)
        );
        assert_matches!(
            LineString::from_json(r#"{"type":"LineString","coordinates":[[200,0],[10,20]]}"#),
            Err(GeoJsonError::LongitudeRange)
        );
        assert_matches!(
            LineString::from_json(r#"{"type":"LineString"}"#),
            Err(GeoJsonError::InvalidCoordinates)
        );
    }

    #[test]
    fn serializes_with_optional_bbox() {
        let mut line_string = LineString::must(vertices(&[&[10.0, 20.0], &[30.0, 40.0]]));
        assert_eq!(
            serde_json::to_value(&line_string).unwrap(),
            json!({"type": "LineString", "coordinates": [[10.0, 20.0], [30.0, 40.0]]})
        );

        line_string.serialize_bbox = true;
        assert_eq!(
            serde_json::to_value(&line_string).unwrap(),
            json!({
                "type": "LineString",
                "coordinates": [[10.0, 20.0], [30.0, 40.0]],
                "bbox": [10.0, 20.0, 30.0, 40.0]
            })
        );
    }

    #[test]
    fn json_round_trip() {
        let line_string = LineString::must(vertices(&[
            &[10.0, 20.0],
            &[30.0, 40.0, 50.0],
            &[-10.0, -20.0],
        ]));
        let json = line_string.to_json().unwrap();
        assert_eq!(LineString::from_json(&json).unwrap(), line_string);
    }
}
