//! MultiPolygon geometry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::document::{bbox_member, GeometryDocument, GeometryRecord};
use crate::error::GeoJsonError;
use crate::geometry::{
    coordinates_array, BoundingBox, Geometry, GeometryType, LinearRing, Polygon, Vertices,
};

/// A set of polygons. May be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    /// Whether to include a `bbox` member when serializing.
    pub serialize_bbox: bool,
}

impl MultiPolygon {
    /// Creates a multi polygon from raw ring groups.
    ///
    /// Each group is validated and its winding normalized exactly as by
    /// [`Polygon::new`]; zero groups are legal.
    pub fn new(groups: Vec<Vec<LinearRing>>) -> Result<Self, GeoJsonError> {
        let mut polygons = Vec::with_capacity(groups.len());
        for rings in groups {
            polygons.push(Polygon::new(rings)?);
        }

        Ok(Self {
            polygons,
            serialize_bbox: false,
        })
    }

    /// Same as [`MultiPolygon::new`] but panics on invalid input.
    pub fn must(groups: Vec<Vec<LinearRing>>) -> Self {
        match Self::new(groups) {
            Ok(multi_polygon) => multi_polygon,
            Err(e) => panic!("invalid multi polygon: {e}"),
        }
    }

    /// Creates a multi polygon from already-constructed polygons.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self {
            polygons,
            serialize_bbox: false,
        }
    }

    /// The polygons of the multi polygon.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// All vertices of all rings of all polygons, concatenated in order.
    pub fn vertices(&self) -> Vertices {
        self.polygons
            .iter()
            .flat_map(Polygon::vertices)
            .collect()
    }

    /// Bounding box over all polygons.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices())
    }

    /// Decodes a multi polygon from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, GeoJsonError> {
        match Geometry::from_json(json)? {
            Geometry::MultiPolygon(multi_polygon) => Ok(multi_polygon),
            _ => Err(GeoJsonError::InvalidTypeField),
        }
    }

    /// Encodes the multi polygon as JSON.
    pub fn to_json(&self) -> Result<String, GeoJsonError> {
        Ok(serde_json::to_string(self)?)
    }

    pub(crate) fn from_coordinates(value: &Value) -> Result<Self, GeoJsonError> {
        let items = coordinates_array(value)?;

        let mut polygons = Vec::with_capacity(items.len());
        for item in items {
            polygons.push(Polygon::from_coordinates(item)?);
        }

        Ok(Self {
            polygons,
            serialize_bbox: false,
        })
    }
}

impl Serialize for MultiPolygon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let coordinates: Vec<&[LinearRing]> =
            self.polygons.iter().map(Polygon::rings).collect();

        GeometryRecord {
            geometry_type: GeometryType::MultiPolygon,
            coordinates,
            bbox: bbox_member(self.serialize_bbox, || self.bounding_box()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MultiPolygon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = GeometryDocument::deserialize(deserializer)?;
        match Geometry::from_document(&document).map_err(serde::de::Error::custom)? {
            Geometry::MultiPolygon(multi_polygon) => Ok(multi_polygon),
            _ => Err(serde::de::Error::custom(GeoJsonError::InvalidTypeField)),
        }
    }
}
