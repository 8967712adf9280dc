//! Raw wire-shape documents.
//!
//! Decode runs in two phases: serde first parses a document into the untyped
//! structures here, then the typed layer interprets them, directed by the
//! `type` tag. Encode goes through the output records, which borrow from the
//! typed model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::feature::{Feature, FeatureId, ObjectType, Properties};
use crate::geometry::{BoundingBox, Geometry, GeometryType};

/// Untyped shape of a geometry node before type-directed interpretation.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeometryDocument {
    #[serde(rename = "type", default)]
    pub geometry_type: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Value>,
    #[serde(default)]
    pub geometries: Option<Vec<GeometryDocument>>,
}

/// Untyped shape of a top-level object: a feature or a feature collection.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FeatureDocument {
    #[serde(rename = "type", default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub geometry: Option<GeometryDocument>,
    #[serde(default)]
    pub properties: Option<Properties>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub features: Option<Vec<FeatureDocument>>,
}

/// Output record of a coordinate-bearing geometry.
#[derive(Serialize)]
pub(crate) struct GeometryRecord<C> {
    #[serde(rename = "type")]
    pub geometry_type: GeometryType,
    pub coordinates: C,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

/// Output record of a geometry collection.
#[derive(Serialize)]
pub(crate) struct GeometryCollectionRecord<'a> {
    #[serde(rename = "type")]
    pub geometry_type: GeometryType,
    pub geometries: &'a [Geometry],
}

/// Output record of a single feature.
#[derive(Serialize)]
pub(crate) struct FeatureRecord<'a> {
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub geometry: Option<&'a Geometry>,
    #[serde(skip_serializing_if = "Properties::is_empty")]
    pub properties: &'a Properties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a FeatureId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

/// Output record of a feature collection.
#[derive(Serialize)]
pub(crate) struct FeatureCollectionRecord<'a> {
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub features: &'a [Feature],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

/// Computes the optional `bbox` member of an output record. Empty boxes are
/// never written.
pub(crate) fn bbox_member(
    serialize: bool,
    bounding_box: impl FnOnce() -> BoundingBox,
) -> Option<BoundingBox> {
    if !serialize {
        return None;
    }

    let bounding_box = bounding_box();
    (!bounding_box.is_empty()).then_some(bounding_box)
}
