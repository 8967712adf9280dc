//! Polygon geometry and ring orientation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::document::{bbox_member, GeometryDocument, GeometryRecord};
use crate::error::GeoJsonError;
use crate::geometry::{
    coordinates_array, BoundingBox, Geometry, GeometryType, LinearRing, Vertices, Winding,
};

/// An area bounded by one outer ring, with zero or more holes.
///
/// Construction normalizes ring winding: the outer ring is counterclockwise
/// and every hole is clockwise, regardless of the input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<LinearRing>,
    /// Whether to include a `bbox` member when serializing.
    pub serialize_bbox: bool,
}

impl Polygon {
    /// Creates a polygon from the given rings; the first ring is the outer
    /// boundary and the rest are holes. Fails when no rings are given.
    pub fn new(rings: Vec<LinearRing>) -> Result<Self, GeoJsonError> {
        if rings.is_empty() {
            return Err(GeoJsonError::PolygonRingCount);
        }

        let mut rings = rings;
        orient_rings(&mut rings);

        Ok(Self {
            rings,
            serialize_bbox: false,
        })
    }

    /// Same as [`Polygon::new`] but panics on invalid input.
    pub fn must(rings: Vec<LinearRing>) -> Self {
        match Self::new(rings) {
            Ok(polygon) => polygon,
            Err(e) => panic!("invalid polygon: {e}"),
        }
    }

    /// All rings of the polygon, outer boundary first.
    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    /// The outer boundary of the polygon.
    pub fn outer_ring(&self) -> &LinearRing {
        &self.rings[0]
    }

    /// The holes of the polygon, possibly none.
    pub fn inner_rings(&self) -> &[LinearRing] {
        &self.rings[1..]
    }

    /// All vertices of all rings, concatenated in order.
    pub fn vertices(&self) -> Vertices {
        self.rings
            .iter()
            .flat_map(|ring| ring.iter())
            .cloned()
            .collect()
    }

    /// Bounding box over all rings.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices())
    }

    /// Decodes a polygon from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, GeoJsonError> {
        match Geometry::from_json(json)? {
            Geometry::Polygon(polygon) => Ok(polygon),
            _ => Err(GeoJsonError::InvalidTypeField),
        }
    }

    /// Encodes the polygon as JSON.
    pub fn to_json(&self) -> Result<String, GeoJsonError> {
        Ok(serde_json::to_string(self)?)
    }

    pub(crate) fn from_coordinates(value: &Value) -> Result<Self, GeoJsonError> {
        let items = coordinates_array(value)?;

        let mut rings = Vec::with_capacity(items.len());
        for item in items {
            rings.push(LinearRing::from_value(item)?);
        }

        if rings.is_empty() {
            return Err(GeoJsonError::PolygonRingCount);
        }

        orient_rings(&mut rings);

        Ok(Self {
            rings,
            serialize_bbox: false,
        })
    }
}

/// Forces the outer ring counterclockwise and every hole clockwise.
fn orient_rings(rings: &mut [LinearRing]) {
    let Some((outer, holes)) = rings.split_first_mut() else {
        return;
    };

    outer.ensure_winding(Winding::CounterClockwise);
    for hole in holes {
        hole.ensure_winding(Winding::Clockwise);
    }
}

impl Serialize for Polygon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GeometryRecord {
            geometry_type: GeometryType::Polygon,
            coordinates: &self.rings,
            bbox: bbox_member(self.serialize_bbox, || self.bounding_box()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Polygon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = GeometryDocument::deserialize(deserializer)?;
        match Geometry::from_document(&document).map_err(serde::de::Error::custom)? {
            Geometry::Polygon(polygon) => Ok(polygon),
            _ => Err(serde::de::Error::custom(GeoJsonError::InvalidTypeField)),
        }
    }
}
