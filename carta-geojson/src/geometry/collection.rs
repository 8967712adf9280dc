//! GeometryCollection geometry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::document::{GeometryCollectionRecord, GeometryDocument};
use crate::error::GeoJsonError;
use crate::geometry::{BoundingBox, Geometry, GeometryType, Vertices};

/// A heterogeneous set of geometries, possibly nested.
///
/// The children are owned outright; the backing vector supplies the heap
/// indirection the recursive variant set requires.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from the given geometries.
    pub fn from_geometries(geometries: Vec<Geometry>) -> Self {
        Self { geometries }
    }

    /// The geometries of the collection.
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// Consumes the collection, returning its geometries.
    pub fn into_geometries(self) -> Vec<Geometry> {
        self.geometries
    }

    /// All vertices of all children, concatenated recursively.
    pub fn vertices(&self) -> Vertices {
        self.geometries
            .iter()
            .flat_map(Geometry::vertices)
            .collect()
    }

    /// Bounding box over all children.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices())
    }

    /// Decodes a geometry collection from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, GeoJsonError> {
        match Geometry::from_json(json)? {
            Geometry::GeometryCollection(collection) => Ok(collection),
            _ => Err(GeoJsonError::InvalidTypeField),
        }
    }

    /// Encodes the geometry collection as JSON.
    pub fn to_json(&self) -> Result<String, GeoJsonError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for GeometryCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GeometryCollectionRecord {
            geometry_type: GeometryType::GeometryCollection,
            geometries: &self.geometries,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GeometryCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = GeometryDocument::deserialize(deserializer)?;
        match Geometry::from_document(&document).map_err(serde::de::Error::custom)? {
            Geometry::GeometryCollection(collection) => Ok(collection),
            _ => Err(serde::de::Error::custom(GeoJsonError::InvalidTypeField)),
        }
    }
}
