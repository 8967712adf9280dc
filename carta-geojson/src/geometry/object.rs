//! The geometry envelope.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::document::GeometryDocument;
use crate::error::GeoJsonError;
use crate::geometry::{
    BoundingBox, Geometry, GeometryCollection, GeometryType, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, Vertices,
};

/// Holder of at most one concrete geometry.
///
/// This is the target of polymorphic decode: the envelope reads a document's
/// `type` tag and populates the matching variant. An empty envelope is how a
/// feature represents `geometry: null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryObject {
    geometry: Option<Geometry>,
}

impl GeometryObject {
    /// Creates an envelope holding the given geometry.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
        }
    }

    /// Creates an empty envelope.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The held geometry, if any.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Consumes the envelope, returning the held geometry, if any.
    pub fn into_geometry(self) -> Option<Geometry> {
        self.geometry
    }

    /// The type tag of the held geometry; `None` when empty.
    pub fn geometry_type(&self) -> Option<GeometryType> {
        self.geometry.as_ref().map(Geometry::geometry_type)
    }

    /// Whether the envelope holds nothing.
    pub fn is_empty(&self) -> bool {
        self.geometry.is_none()
    }

    /// Whether the envelope holds a point.
    pub fn is_point(&self) -> bool {
        matches!(self.geometry, Some(Geometry::Point(_)))
    }

    /// Whether the envelope holds a multi point.
    pub fn is_multi_point(&self) -> bool {
        matches!(self.geometry, Some(Geometry::MultiPoint(_)))
    }

    /// Whether the envelope holds a line string.
    pub fn is_line_string(&self) -> bool {
        matches!(self.geometry, Some(Geometry::LineString(_)))
    }

    /// Whether the envelope holds a multi line string.
    pub fn is_multi_line_string(&self) -> bool {
        matches!(self.geometry, Some(Geometry::MultiLineString(_)))
    }

    /// Whether the envelope holds a polygon.
    pub fn is_polygon(&self) -> bool {
        matches!(self.geometry, Some(Geometry::Polygon(_)))
    }

    /// Whether the envelope holds a multi polygon.
    pub fn is_multi_polygon(&self) -> bool {
        matches!(self.geometry, Some(Geometry::MultiPolygon(_)))
    }

    /// Whether the envelope holds a geometry collection.
    pub fn is_geometry_collection(&self) -> bool {
        matches!(self.geometry, Some(Geometry::GeometryCollection(_)))
    }

    /// Narrows the envelope to a point.
    pub fn as_point(&self) -> Result<&Point, GeoJsonError> {
        match &self.geometry {
            None => Err(GeoJsonError::GeometryNotDefined),
            Some(Geometry::Point(point)) => Ok(point),
            Some(_) => Err(GeoJsonError::GeometryTypeMismatch),
        }
    }

    /// Narrows the envelope to a multi point.
    pub fn as_multi_point(&self) -> Result<&MultiPoint, GeoJsonError> {
        match &self.geometry {
            None => Err(GeoJsonError::GeometryNotDefined),
            Some(Geometry::MultiPoint(multi_point)) => Ok(multi_point),
            Some(_) => Err(GeoJsonError::GeometryTypeMismatch),
        }
    }

    /// Narrows the envelope to a line string.
    pub fn as_line_string(&self) -> Result<&LineString, GeoJsonError> {
        match &self.geometry {
            None => Err(GeoJsonError::GeometryNotDefined),
            Some(Geometry::LineString(line_string)) => Ok(line_string),
            Some(_) => Err(GeoJsonError::GeometryTypeMismatch),
        }
    }

    /// Narrows the envelope to a multi line string.
    pub fn as_multi_line_string(&self) -> Result<&MultiLineString, GeoJsonError> {
        match &self.geometry {
            None => Err(GeoJsonError::GeometryNotDefined),
            Some(Geometry::MultiLineString(multi_line_string)) => Ok(multi_line_string),
            Some(_) => Err(GeoJsonError::GeometryTypeMismatch),
        }
    }

    /// Narrows the envelope to a polygon.
    pub fn as_polygon(&self) -> Result<&Polygon, GeoJsonError> {
        match &self.geometry {
            None => Err(GeoJsonError::GeometryNotDefined),
            Some(Geometry::Polygon(polygon)) => Ok(polygon),
            Some(_) => Err(GeoJsonError::GeometryTypeMismatch),
        }
    }

    /// Narrows the envelope to a multi polygon.
    pub fn as_multi_polygon(&self) -> Result<&MultiPolygon, GeoJsonError> {
        match &self.geometry {
            None => Err(GeoJsonError::GeometryNotDefined),
            Some(Geometry::MultiPolygon(multi_polygon)) => Ok(multi_polygon),
            Some(_) => Err(GeoJsonError::GeometryTypeMismatch),
        }
    }

    /// Narrows the envelope to a geometry collection.
    pub fn as_geometry_collection(&self) -> Result<&GeometryCollection, GeoJsonError> {
        match &self.geometry {
            None => Err(GeoJsonError::GeometryNotDefined),
            Some(Geometry::GeometryCollection(collection)) => Ok(collection),
            Some(_) => Err(GeoJsonError::GeometryTypeMismatch),
        }
    }

    /// The flattened vertex list of the held geometry; empty when the
    /// envelope is empty.
    pub fn vertices(&self) -> Vertices {
        self.geometry
            .as_ref()
            .map(Geometry::vertices)
            .unwrap_or_default()
    }

    /// Bounding box of the held geometry; empty when the envelope is empty.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices())
    }

    /// Decodes an envelope from the JSON representation of any geometry.
    pub fn from_json(json: &str) -> Result<Self, GeoJsonError> {
        Geometry::from_json(json).map(Self::new)
    }

    /// Encodes the held geometry as JSON. An empty envelope fails with
    /// [`GeoJsonError::GeometryNotDefined`].
    pub fn to_json(&self) -> Result<String, GeoJsonError> {
        match &self.geometry {
            Some(geometry) => geometry.to_json(),
            None => Err(GeoJsonError::GeometryNotDefined),
        }
    }

    pub(crate) fn from_document(document: &GeometryDocument) -> Result<Self, GeoJsonError> {
        Geometry::from_document(document).map(Self::new)
    }
}

impl From<Geometry> for GeometryObject {
    fn from(geometry: Geometry) -> Self {
        Self::new(geometry)
    }
}

impl Serialize for GeometryObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.geometry {
            Some(geometry) => geometry.serialize(serializer),
            None => Err(serde::ser::Error::custom(GeoJsonError::GeometryNotDefined)),
        }
    }
}

impl<'de> Deserialize<'de> for GeometryObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = GeometryDocument::deserialize(deserializer)?;
        Self::from_document(&document).map_err(serde::de::Error::custom)
    }
}
