//! The top-level GeoJSON object.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::document::FeatureDocument;
use crate::error::GeoJsonError;
use crate::feature::{Feature, FeatureCollection};

/// Tag naming a top-level object on the wire.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    /// No object held.
    #[serde(rename = "Object")]
    Empty,
    /// A single feature.
    Feature,
    /// A collection of features.
    FeatureCollection,
}

impl ObjectType {
    /// The wire tag of the object type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "Object",
            Self::Feature => "Feature",
            Self::FeatureCollection => "FeatureCollection",
        }
    }
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The top-level decode entry point: a feature, a feature collection, or
/// nothing at all.
///
/// Anything else at the top level of a document, including a bare geometry,
/// fails with [`GeoJsonError::InvalidFeature`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GeoJsonObject {
    /// No object held. Encoding an empty object fails.
    #[default]
    Empty,
    /// A single feature.
    Feature(Feature),
    /// A collection of features.
    FeatureCollection(FeatureCollection),
}

impl GeoJsonObject {
    /// The type tag of the held object.
    pub fn object_type(&self) -> ObjectType {
        match self {
            Self::Empty => ObjectType::Empty,
            Self::Feature(_) => ObjectType::Feature,
            Self::FeatureCollection(_) => ObjectType::FeatureCollection,
        }
    }

    /// Whether the object holds a single feature.
    pub fn is_feature(&self) -> bool {
        matches!(self, Self::Feature(_))
    }

    /// Whether the object holds a feature collection.
    pub fn is_feature_collection(&self) -> bool {
        matches!(self, Self::FeatureCollection(_))
    }

    /// Narrows the object to a single feature.
    pub fn feature(&self) -> Result<&Feature, GeoJsonError> {
        match self {
            Self::Feature(feature) => Ok(feature),
            _ => Err(GeoJsonError::InvalidFeature),
        }
    }

    /// Narrows the object to a feature collection.
    pub fn feature_collection(&self) -> Result<&FeatureCollection, GeoJsonError> {
        match self {
            Self::FeatureCollection(collection) => Ok(collection),
            _ => Err(GeoJsonError::InvalidFeature),
        }
    }

    /// Decodes a top-level object, dispatching on its `type` tag.
    pub fn from_json(json: &str) -> Result<Self, GeoJsonError> {
        let document: FeatureDocument = serde_json::from_str(json)?;
        Self::from_document(&document)
    }

    /// Encodes the held object as JSON. An empty object fails with
    /// [`GeoJsonError::InvalidFeature`].
    pub fn to_json(&self) -> Result<String, GeoJsonError> {
        match self {
            Self::Empty => Err(GeoJsonError::InvalidFeature),
            _ => Ok(serde_json::to_string(self)?),
        }
    }

    pub(crate) fn from_document(document: &FeatureDocument) -> Result<Self, GeoJsonError> {
        match document.object_type.as_deref() {
            Some("Feature") => Feature::from_document(document).map(Self::Feature),
            Some("FeatureCollection") => {
                FeatureCollection::from_document(document).map(Self::FeatureCollection)
            }
            _ => Err(GeoJsonError::InvalidFeature),
        }
    }
}

impl From<Feature> for GeoJsonObject {
    fn from(feature: Feature) -> Self {
        Self::Feature(feature)
    }
}

impl From<FeatureCollection> for GeoJsonObject {
    fn from(collection: FeatureCollection) -> Self {
        Self::FeatureCollection(collection)
    }
}

impl Serialize for GeoJsonObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => Err(serde::ser::Error::custom(GeoJsonError::InvalidFeature)),
            Self::Feature(feature) => feature.serialize(serializer),
            Self::FeatureCollection(collection) => collection.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for GeoJsonObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = FeatureDocument::deserialize(deserializer)?;
        Self::from_document(&document).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn dispatches_on_the_top_level_tag() {
        let object = GeoJsonObject::from_json(
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]}}"#,
        )
        .unwrap();
        assert!(object.is_feature());
        assert_eq!(object.object_type(), ObjectType::Feature);
        assert!(object.feature().unwrap().geometry.is_point());
        assert_matches!(
            object.feature_collection(),
            Err(GeoJsonError::InvalidFeature)
        );

        let object =
            GeoJsonObject::from_json(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert!(object.is_feature_collection());
        assert!(object.feature_collection().unwrap().features.is_empty());
    }

    #[test]
    fn bare_geometries_are_not_top_level_objects() {
        assert_matches!(
            GeoJsonObject::from_json(r#"{"type":"Point","coordinates":[1,2]}"#),
            Err(GeoJsonError::InvalidFeature)
        );
        assert_matches!(
            GeoJsonObject::from_json(r#"{"features":[]}"#),
            Err(GeoJsonError::InvalidFeature)
        );
    }

    #[test]
    fn empty_objects_do_not_encode() {
        let empty = GeoJsonObject::default();
        assert_eq!(empty.object_type(), ObjectType::Empty);
        assert_matches!(empty.to_json(), Err(GeoJsonError::InvalidFeature));
        assert!(serde_json::to_string(&empty).is_err());
        assert_matches!(empty.feature(), Err(GeoJsonError::InvalidFeature));
    }

    #[test]
    fn json_round_trip() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2]}, "id": 7},
                {"type": "Feature", "geometry": null}
            ]
        }"#;

        let object = GeoJsonObject::from_json(json).unwrap();
        let encoded = object.to_json().unwrap();
        assert_eq!(GeoJsonObject::from_json(&encoded).unwrap(), object);

        let deserialized: GeoJsonObject = serde_json::from_str(&encoded).unwrap();
        assert_eq!(deserialized, object);
    }

    #[test]
    fn object_type_tags() {
        assert_eq!(ObjectType::Empty.to_string(), "Object");
        assert_eq!(ObjectType::Feature.to_string(), "Feature");
        assert_eq!(ObjectType::FeatureCollection.to_string(), "FeatureCollection");
    }
}
