//! Geometry variants and the type-directed decode dispatch.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::document::GeometryDocument;
use crate::error::GeoJsonError;

mod bounding_box;
mod collection;
mod coordinates;
mod line_string;
mod linear_ring;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod object;
mod point;
mod polygon;

pub use bounding_box::BoundingBox;
pub use collection::GeometryCollection;
pub use coordinates::{
    Coordinates, Vertices, VerticesBuilder, LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX,
    LONGITUDE_MIN,
};
pub use line_string::{LineString, LINE_STRING_MINIMUM_SIZE};
pub use linear_ring::{LinearRing, Winding, LINEAR_RING_MINIMUM_SIZE};
pub use multi_line_string::{MultiLineString, Segments, SegmentsBuilder};
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use object::GeometryObject;
pub use point::Point;
pub use polygon::Polygon;

/// Tag naming a geometry variant on the wire.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    /// A single position.
    Point,
    /// A set of positions.
    MultiPoint,
    /// An ordered run of positions.
    LineString,
    /// A bundle of line strings.
    MultiLineString,
    /// An area bounded by rings.
    Polygon,
    /// A set of polygons.
    MultiPolygon,
    /// A heterogeneous set of geometries.
    GeometryCollection,
}

impl GeometryType {
    /// Maps a wire tag to its geometry type. Unknown tags fail with
    /// [`GeoJsonError::InvalidTypeField`].
    pub fn from_tag(tag: &str) -> Result<Self, GeoJsonError> {
        match tag {
            "Point" => Ok(Self::Point),
            "MultiPoint" => Ok(Self::MultiPoint),
            "LineString" => Ok(Self::LineString),
            "MultiLineString" => Ok(Self::MultiLineString),
            "Polygon" => Ok(Self::Polygon),
            "MultiPolygon" => Ok(Self::MultiPolygon),
            "GeometryCollection" => Ok(Self::GeometryCollection),
            _ => Err(GeoJsonError::InvalidTypeField),
        }
    }

    /// The wire tag of the geometry type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete geometry of any variant.
///
/// The variant set is closed; decode dispatches over it with a single match
/// on the `type` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A single position.
    Point(Point),
    /// A set of positions.
    MultiPoint(MultiPoint),
    /// An ordered run of positions.
    LineString(LineString),
    /// A bundle of line strings.
    MultiLineString(MultiLineString),
    /// An area bounded by rings.
    Polygon(Polygon),
    /// A set of polygons.
    MultiPolygon(MultiPolygon),
    /// A heterogeneous set of geometries.
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The type tag of the held variant.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::MultiPoint(_) => GeometryType::MultiPoint,
            Self::LineString(_) => GeometryType::LineString,
            Self::MultiLineString(_) => GeometryType::MultiLineString,
            Self::Polygon(_) => GeometryType::Polygon,
            Self::MultiPolygon(_) => GeometryType::MultiPolygon,
            Self::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// The flattened vertex list of the geometry, in document order.
    pub fn vertices(&self) -> Vertices {
        match self {
            Self::Point(point) => point.vertices(),
            Self::MultiPoint(multi_point) => multi_point.vertices(),
            Self::LineString(line_string) => line_string.vertices(),
            Self::MultiLineString(multi_line_string) => multi_line_string.vertices(),
            Self::Polygon(polygon) => polygon.vertices(),
            Self::MultiPolygon(multi_polygon) => multi_polygon.vertices(),
            Self::GeometryCollection(collection) => collection.vertices(),
        }
    }

    /// Bounding box over the flattened vertex list.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices())
    }

    /// Decodes a geometry of any variant from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, GeoJsonError> {
        let document: GeometryDocument = serde_json::from_str(json)?;
        Self::from_document(&document)
    }

    /// Encodes the geometry as JSON.
    pub fn to_json(&self) -> Result<String, GeoJsonError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Interprets a parsed document, directed by its `type` tag.
    ///
    /// Geometry collections are special-cased: their children are each run
    /// through this dispatcher again, depth first; every other variant is
    /// built from the document's `coordinates` member.
    pub(crate) fn from_document(document: &GeometryDocument) -> Result<Self, GeoJsonError> {
        let tag = document
            .geometry_type
            .as_deref()
            .ok_or(GeoJsonError::InvalidTypeField)?;
        let geometry_type = GeometryType::from_tag(tag)?;

        if geometry_type == GeometryType::GeometryCollection {
            let mut children = Vec::new();
            if let Some(entries) = &document.geometries {
                for entry in entries {
                    children.push(Self::from_document(entry)?);
                }
            }

            return Ok(Self::GeometryCollection(GeometryCollection::from_geometries(
                children,
            )));
        }

        let coordinates = document.coordinates.as_ref().unwrap_or(&Value::Null);
        Self::from_coordinates(geometry_type, coordinates)
    }

    /// Builds a coordinate-bearing variant from a raw `coordinates` value.
    ///
    /// Fails with [`GeoJsonError::GeometryCollectionCoordinates`] for
    /// geometry collections, which carry child geometries instead of
    /// coordinates.
    pub fn from_coordinates(
        geometry_type: GeometryType,
        coordinates: &Value,
    ) -> Result<Self, GeoJsonError> {
        match geometry_type {
            GeometryType::Point => Point::from_coordinates(coordinates).map(Self::Point),
            GeometryType::MultiPoint => {
                MultiPoint::from_coordinates(coordinates).map(Self::MultiPoint)
            }
            GeometryType::LineString => {
                LineString::from_coordinates(coordinates).map(Self::LineString)
            }
            GeometryType::MultiLineString => {
                MultiLineString::from_coordinates(coordinates).map(Self::MultiLineString)
            }
            GeometryType::Polygon => Polygon::from_coordinates(coordinates).map(Self::Polygon),
            GeometryType::MultiPolygon => {
                MultiPolygon::from_coordinates(coordinates).map(Self::MultiPolygon)
            }
            GeometryType::GeometryCollection => Err(GeoJsonError::GeometryCollectionCoordinates),
        }
    }
}

/// Borrows the `coordinates` value as an array, the outer nesting level every
/// multi-vertex variant expects.
pub(crate) fn coordinates_array(value: &Value) -> Result<&[Value], GeoJsonError> {
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(GeoJsonError::InvalidCoordinates),
    }
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Point(point) => point.serialize(serializer),
            Self::MultiPoint(multi_point) => multi_point.serialize(serializer),
            Self::LineString(line_string) => line_string.serialize(serializer),
            Self::MultiLineString(multi_line_string) => multi_line_string.serialize(serializer),
            Self::Polygon(polygon) => polygon.serialize(serializer),
            Self::MultiPolygon(multi_polygon) => multi_polygon.serialize(serializer),
            Self::GeometryCollection(collection) => collection.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = GeometryDocument::deserialize(deserializer)?;
        Self::from_document(&document).map_err(serde::de::Error::custom)
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(multi_point: MultiPoint) -> Self {
        Self::MultiPoint(multi_point)
    }
}

impl From<LineString> for Geometry {
    fn from(line_string: LineString) -> Self {
        Self::LineString(line_string)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(multi_line_string: MultiLineString) -> Self {
        Self::MultiLineString(multi_line_string)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(multi_polygon: MultiPolygon) -> Self {
        Self::MultiPolygon(multi_polygon)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(collection: GeometryCollection) -> Self {
        Self::GeometryCollection(collection)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn tags_round_trip() {
        let tags = [
            "Point",
            "MultiPoint",
            "LineString",
            "MultiLineString",
            "Polygon",
            "MultiPolygon",
            "GeometryCollection",
        ];
        for tag in tags {
            let geometry_type = GeometryType::from_tag(tag).unwrap();
            assert_eq!(geometry_type.as_str(), tag);
            assert_eq!(geometry_type.to_string(), tag);
            assert_eq!(serde_json::to_value(geometry_type).unwrap(), json!(tag));
        }

        assert_matches!(
            GeometryType::from_tag("Circle"),
            Err(GeoJsonError::InvalidTypeField)
        );
    }

    #[test]
    fn dispatch_requires_a_type_tag() {
        assert_matches!(
            Geometry::from_json(r#"{"coordinates":[1,2]}"#),
            Err(GeoJsonError::InvalidTypeField)
        );
        assert_matches!(
            Geometry::from_json(r#"{"type":"Circle","coordinates":[1,2]}"#),
            Err(GeoJsonError::InvalidTypeField)
        );
    }

    #[test]
    fn dispatch_requires_coordinates_for_simple_variants() {
        assert_matches!(
            Geometry::from_json(r#"{"type":"Point"}"#),
            Err(GeoJsonError::InvalidCoordinates)
        );
    }

    #[test]
    fn collections_reject_the_coordinate_builder() {
        assert_matches!(
            Geometry::from_coordinates(GeometryType::GeometryCollection, &json!([[1.0, 2.0]])),
            Err(GeoJsonError::GeometryCollectionCoordinates)
        );
    }

    #[test]
    fn every_variant_round_trips() {
        let documents = [
            r#"{"type":"Point","coordinates":[1,2]}"#,
            r#"{"type":"Point","coordinates":[1,2,3]}"#,
            r#"{"type":"MultiPoint","coordinates":[]}"#,
            r#"{"type":"MultiPoint","coordinates":[[1,2],[3,4,5]]}"#,
            r#"{"type":"LineString","coordinates":[[1,2],[3,4]]}"#,
            r#"{"type":"MultiLineString","coordinates":[[[1,2],[3,4]],[[5,6],[7,8]]]}"#,
            r#"{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[0,4],[0,0]]]}"#,
            r#"{"type":"MultiPolygon","coordinates":[]}"#,
            r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[4,0],[4,4],[0,4],[0,0]]]]}"#,
            r#"{"type":"GeometryCollection","geometries":[]}"#,
            r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[1,1]},{"type":"GeometryCollection","geometries":[{"type":"LineString","coordinates":[[1,2],[3,4]]}]}]}"#,
        ];

        for document in documents {
            let geometry = Geometry::from_json(document).unwrap();
            let encoded = geometry.to_json().unwrap();
            assert_eq!(Geometry::from_json(&encoded).unwrap(), geometry, "{document}");
        }
    }

    #[test]
    fn geometry_type_matches_the_held_variant() {
        let geometry = Geometry::from_json(r#"{"type":"Point","coordinates":[1,2]}"#).unwrap();
        assert_eq!(geometry.geometry_type(), GeometryType::Point);

        let geometry: Geometry =
            serde_json::from_str(r#"{"type":"MultiPoint","coordinates":[[1,2]]}"#).unwrap();
        assert_eq!(geometry.geometry_type(), GeometryType::MultiPoint);
    }
}
