//! Feature collections.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::document::{bbox_member, FeatureCollectionRecord, FeatureDocument};
use crate::error::GeoJsonError;
use crate::feature::{Feature, ObjectType};
use crate::geometry::{BoundingBox, Vertices};

/// An ordered collection of features.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    /// The features of the collection.
    pub features: Vec<Feature>,
    /// Whether to include a `bbox` member when serializing.
    pub serialize_bbox: bool,
}

impl FeatureCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from the given features.
    pub fn from_features(features: Vec<Feature>) -> Self {
        Self {
            features,
            serialize_bbox: false,
        }
    }

    /// All vertices of all member features, concatenated in order.
    pub fn vertices(&self) -> Vertices {
        self.features.iter().flat_map(Feature::vertices).collect()
    }

    /// Bounding box over all member features.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices())
    }

    /// Decodes a feature collection from its JSON representation. The
    /// document's `type` must be `"FeatureCollection"` and every member must
    /// be a valid feature.
    pub fn from_json(json: &str) -> Result<Self, GeoJsonError> {
        let document: FeatureDocument = serde_json::from_str(json)?;
        Self::from_document(&document)
    }

    /// Decodes a feature collection, skipping invalid member features.
    ///
    /// The document itself must still be a well-formed FeatureCollection;
    /// member features that fail validation are dropped with a warning
    /// instead of aborting the decode.
    pub fn from_json_lossy(json: &str) -> Result<Self, GeoJsonError> {
        let document: FeatureDocument = serde_json::from_str(json)?;

        if document.object_type.as_deref() != Some("FeatureCollection") {
            return Err(GeoJsonError::InvalidFeature);
        }

        let mut features = Vec::new();
        for entry in document.features.iter().flatten() {
            match Feature::from_document(entry) {
                Ok(feature) => features.push(feature),
                Err(e) => log::warn!("skipping invalid feature: {e}"),
            }
        }

        Ok(Self::from_features(features))
    }

    /// Encodes the feature collection as JSON.
    pub fn to_json(&self) -> Result<String, GeoJsonError> {
        Ok(serde_json::to_string(self)?)
    }

    pub(crate) fn from_document(document: &FeatureDocument) -> Result<Self, GeoJsonError> {
        if document.object_type.as_deref() != Some("FeatureCollection") {
            return Err(GeoJsonError::InvalidFeature);
        }

        let mut features = Vec::new();
        for entry in document.features.iter().flatten() {
            features.push(Feature::from_document(entry)?);
        }

        Ok(Self::from_features(features))
    }
}

impl Serialize for FeatureCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FeatureCollectionRecord {
            object_type: ObjectType::FeatureCollection,
            features: &self.features,
            bbox: bbox_member(self.serialize_bbox, || self.bounding_box()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FeatureCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = FeatureDocument::deserialize(deserializer)?;
        Self::from_document(&document).map_err(serde::de::Error::custom)
    }
}
