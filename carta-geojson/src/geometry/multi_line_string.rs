//! MultiLineString geometry and its segment lists.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::document::{bbox_member, GeometryDocument, GeometryRecord};
use crate::error::GeoJsonError;
use crate::geometry::{
    coordinates_array, BoundingBox, Geometry, GeometryType, LineString, Vertices,
    LINE_STRING_MINIMUM_SIZE,
};

/// Ordered vertex runs making up a [`MultiLineString`].
pub type Segments = Vec<Vertices>;

/// Fluent accumulator for [`Segments`].
///
/// Rejects empty segments; like [`VerticesBuilder`](crate::VerticesBuilder),
/// the first error is latched and surfaces at
/// [`build`](SegmentsBuilder::build).
#[derive(Debug, Default)]
pub struct SegmentsBuilder {
    segments: Segments,
    error: Option<GeoJsonError>,
}

impl SegmentsBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one segment to the list.
    pub fn push(mut self, vertices: Vertices) -> Self {
        if self.error.is_some() {
            return self;
        }

        if vertices.is_empty() {
            self.error = Some(GeoJsonError::VerticesEmpty);
            return self;
        }

        self.segments.push(vertices);
        self
    }

    /// Returns the accumulated segments, or the first error encountered.
    pub fn build(self) -> Result<Segments, GeoJsonError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.segments),
        }
    }
}

/// A bundle of line strings.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    segments: Segments,
    /// Whether to include a `bbox` member when serializing.
    pub serialize_bbox: bool,
}

impl MultiLineString {
    /// Creates a multi line string from the given segments.
    ///
    /// Fails when no segments are given; each segment must itself be a valid
    /// line string, whose error propagates unchanged.
    pub fn new(segments: Segments) -> Result<Self, GeoJsonError> {
        if segments.is_empty() {
            return Err(GeoJsonError::MultiLineStringEmpty);
        }

        for segment in &segments {
            if segment.len() < LINE_STRING_MINIMUM_SIZE {
                return Err(GeoJsonError::LineStringTooShort);
            }
        }

        Ok(Self {
            segments,
            serialize_bbox: false,
        })
    }

    /// Same as [`MultiLineString::new`] but panics on invalid input.
    pub fn must(segments: Segments) -> Self {
        match Self::new(segments) {
            Ok(multi_line_string) => multi_line_string,
            Err(e) => panic!("invalid multi line string: {e}"),
        }
    }

    /// The segments of the multi line string.
    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    /// All vertices of all segments, concatenated in order.
    pub fn vertices(&self) -> Vertices {
        self.segments.iter().flatten().cloned().collect()
    }

    /// Bounding box over all segments.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices())
    }

    /// Decodes a multi line string from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, GeoJsonError> {
        match Geometry::from_json(json)? {
            Geometry::MultiLineString(multi_line_string) => Ok(multi_line_string),
            _ => Err(GeoJsonError::InvalidTypeField),
        }
    }

    /// Encodes the multi line string as JSON.
    pub fn to_json(&self) -> Result<String, GeoJsonError> {
        Ok(serde_json::to_string(self)?)
    }

    pub(crate) fn from_coordinates(value: &Value) -> Result<Self, GeoJsonError> {
        let items = coordinates_array(value)?;

        if items.is_empty() {
            return Err(GeoJsonError::MultiLineStringEmpty);
        }

        let mut segments = Vec::with_capacity(items.len());
        for item in items {
            segments.push(LineString::from_coordinates(item)?.into_vertices());
        }

        Ok(Self {
            segments,
            serialize_bbox: false,
        })
    }
}

impl Serialize for MultiLineString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GeometryRecord {
            geometry_type: GeometryType::MultiLineString,
            coordinates: &self.segments,
            bbox: bbox_member(self.serialize_bbox, || self.bounding_box()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MultiLineString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = GeometryDocument::deserialize(deserializer)?;
        match Geometry::from_document(&document).map_err(serde::de::Error::custom)? {
            Geometry::MultiLineString(multi_line_string) => Ok(multi_line_string),
            _ => Err(serde::de::Error::custom(GeoJsonError::InvalidTypeField)),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::geometry::Coordinates;

    fn vertices(values: &[&[f64]]) -> Vertices {
        values.iter().map(|v| Coordinates::must(v)).collect()
    }

    #[test]
    fn requires_at_least_one_segment() {
        assert_matches!(
            MultiLineString::new(vec![]),
            Err(GeoJsonError::MultiLineStringEmpty)
        );
    }

    #[test]
    fn segment_errors_propagate() {
        let segments = vec![
            vertices(&[&[10.0, 20.0], &[30.0, 40.0]]),
            vertices(&[&[50.0, 60.0]]),
        ];
        assert_matches!(
            MultiLineString::new(segments),
            Err(GeoJsonError::LineStringTooShort)
        );
    }

    #[test]
    fn vertices_flatten_in_order() {
        let multi_line_string = MultiLineString::must(vec![
            vertices(&[&[10.0, 20.0], &[30.0, 40.0]]),
            vertices(&[&[50.0, 60.0], &[70.0, 80.0]]),
        ]);
        assert_eq!(
            multi_line_string.vertices(),
            vertices(&[&[10.0, 20.0], &[30.0, 40.0], &[50.0, 60.0], &[70.0, 80.0]])
        );
        assert_eq!(
            multi_line_string.bounding_box().as_slice(),
            &[10.0, 20.0, 70.0, 80.0]
        );
    }

    #[test]
    fn decode_rejects_bad_documents() {
        assert_matches!(
            MultiLineString::from_json(r#"{"type":"MultiLineString","coordinates":[]}"#),
            Err(GeoJsonError::MultiLineStringEmpty)
        );
        assert_matches!(
            MultiLineString::from_json(r#"{"type":"MultiLineString","coordinates":[[[1,2]]]}"#),
            Err(GeoJsonError::LineStringTooShort)
        );
        assert_matches!(
            MultiLineString::from_json(r#"{"type":"MultiLineString","coordinates":5}"#),
            Err(GeoJsonError::InvalidCoordinates)
        );
    }

    #[test]
    fn json_round_trip() {
        let multi_line_string = MultiLineString::must(vec![
            vertices(&[&[10.0, 20.0], &[30.0, 40.0]]),
            vertices(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]),
        ]);
        let json = multi_line_string.to_json().unwrap();
        assert_eq!(
            MultiLineString::from_json(&json).unwrap(),
            multi_line_string
        );
        assert_eq!(
            serde_json::to_value(&multi_line_string).unwrap(),
            json!({
                "type": "MultiLineString",
                "coordinates": [
                    [[10.0, 20.0], [30.0, 40.0]],
                    [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]
                ]
            })
        );
    }

    #[test]
    fn builder_rejects_empty_segments() {
        let segments = SegmentsBuilder::new()
            .push(vertices(&[&[10.0, 20.0], &[30.0, 40.0]]))
            .build()
            .unwrap();
        assert_eq!(segments.len(), 1);

        let result = SegmentsBuilder::new()
            .push(vec![])
            .push(vertices(&[&[10.0, 20.0], &[30.0, 40.0]]))
            .build();
        assert_matches!(result, Err(GeoJsonError::VerticesEmpty));
    }
}
