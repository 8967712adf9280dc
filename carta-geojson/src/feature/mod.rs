//! Features, feature collections and the top-level object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::document::{bbox_member, FeatureDocument, FeatureRecord};
use crate::error::GeoJsonError;
use crate::geometry::{BoundingBox, Geometry, GeometryObject, Vertices};

mod collection;
mod id;
mod object;
mod properties;

pub use collection::FeatureCollection;
pub use id::FeatureId;
pub use object::{GeoJsonObject, ObjectType};
pub use properties::Properties;

/// A geometry with metadata and an optional identifier.
///
/// A feature's geometry may be undefined; the empty envelope encodes as
/// `geometry: null` and decodes back to an empty envelope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
    /// The feature's geometry.
    pub geometry: GeometryObject,
    /// Free-form metadata of the feature.
    pub properties: Properties,
    /// Optional identifier of the feature.
    pub id: Option<FeatureId>,
    /// Whether to include a `bbox` member when serializing.
    pub serialize_bbox: bool,
}

impl Feature {
    /// The flattened vertex list of the feature's geometry; empty when the
    /// geometry is undefined.
    pub fn vertices(&self) -> Vertices {
        self.geometry.vertices()
    }

    /// Bounding box of the feature's geometry; empty when the geometry is
    /// undefined.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices())
    }

    /// Decodes a feature from its JSON representation. The document's `type`
    /// must be `"Feature"`.
    pub fn from_json(json: &str) -> Result<Self, GeoJsonError> {
        let document: FeatureDocument = serde_json::from_str(json)?;
        Self::from_document(&document)
    }

    /// Encodes the feature as JSON.
    pub fn to_json(&self) -> Result<String, GeoJsonError> {
        Ok(serde_json::to_string(self)?)
    }

    pub(crate) fn from_document(document: &FeatureDocument) -> Result<Self, GeoJsonError> {
        if document.object_type.as_deref() != Some("Feature") {
            return Err(GeoJsonError::InvalidFeature);
        }

        let geometry = match &document.geometry {
            Some(geometry) => GeometryObject::from_document(geometry)?,
            None => GeometryObject::empty(),
        };

        let id = match &document.id {
            Some(value) => Some(FeatureId::from_value(value)?),
            None => None,
        };

        Ok(Self {
            geometry,
            properties: document.properties.clone().unwrap_or_default(),
            id,
            serialize_bbox: false,
        })
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FeatureRecord {
            object_type: ObjectType::Feature,
            geometry: self.geometry.geometry(),
            properties: &self.properties,
            id: self.id.as_ref(),
            bbox: bbox_member(self.serialize_bbox, || self.bounding_box()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Feature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = FeatureDocument::deserialize(deserializer)?;
        Self::from_document(&document).map_err(serde::de::Error::custom)
    }
}

/// Builder for [`Feature`].
#[derive(Debug, Default)]
pub struct FeatureBuilder {
    feature: Feature,
}

impl FeatureBuilder {
    /// Creates a builder for a feature with no geometry, no properties and
    /// no identifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the feature's geometry.
    pub fn geometry(mut self, geometry: impl Into<Geometry>) -> Self {
        self.feature.geometry = GeometryObject::new(geometry.into());
        self
    }

    /// Sets the feature's properties.
    pub fn properties(mut self, properties: Properties) -> Self {
        self.feature.properties = properties;
        self
    }

    /// Sets the feature's identifier.
    pub fn id(mut self, id: impl Into<FeatureId>) -> Self {
        self.feature.id = Some(id.into());
        self
    }

    /// Returns the constructed feature.
    pub fn build(self) -> Feature {
        self.feature
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::geometry::Point;

    #[test]
    fn builder_assembles_a_feature() {
        let mut properties = Properties::new();
        properties.set("name", "Tokyo").unwrap();

        let feature = FeatureBuilder::new()
            .geometry(Point::must(&[139.75, 35.68]))
            .properties(properties)
            .id("jp-13")
            .build();

        assert!(feature.geometry.is_point());
        assert_eq!(feature.properties.get_string("name").unwrap(), "Tokyo");
        assert_eq!(feature.id, Some(FeatureId::from("jp-13")));
    }

    #[test]
    fn decodes_a_full_feature() {
        let feature = Feature::from_json(
            r#"{
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [139.75, 35.68]},
                "properties": {"name": "Tokyo"},
                "id": "jp-13"
            }"#,
        )
        .unwrap();

        assert_eq!(feature.geometry.as_point().unwrap().longitude(), 139.75);
        assert_eq!(feature.properties.get_string("name").unwrap(), "Tokyo");
        assert_eq!(feature.id, Some(FeatureId::from("jp-13")));
    }

    #[test]
    fn null_and_missing_geometry_are_valid() {
        let feature =
            Feature::from_json(r#"{"type":"Feature","geometry":null,"properties":null}"#).unwrap();
        assert!(feature.geometry.is_empty());
        assert!(feature.bounding_box().is_empty());

        let feature = Feature::from_json(r#"{"type":"Feature"}"#).unwrap();
        assert!(feature.geometry.is_empty());
        assert!(feature.properties.is_empty());
        assert_eq!(feature.id, None);
    }

    #[test]
    fn rejects_wrong_tags_and_bad_members() {
        assert_matches!(
            Feature::from_json(r#"{"type":"FeatureCollection","features":[]}"#),
            Err(GeoJsonError::InvalidFeature)
        );
        assert_matches!(
            Feature::from_json(r#"{"geometry":null}"#),
            Err(GeoJsonError::InvalidFeature)
        );
        assert_matches!(
            Feature::from_json(r#"{"type":"Feature","id":true}"#),
            Err(GeoJsonError::InvalidId)
        );
        assert_matches!(
            Feature::from_json(
                r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[200,0]}}"#
            ),
            Err(GeoJsonError::LongitudeRange)
        );
    }

    #[test]
    fn serializes_with_null_geometry_and_omitted_members() {
        let feature = Feature::default();
        assert_eq!(
            serde_json::to_value(&feature).unwrap(),
            json!({"type": "Feature", "geometry": null})
        );
    }

    #[test]
    fn serializes_with_bbox_on_request() {
        let mut feature = FeatureBuilder::new()
            .geometry(Point::must(&[10.0, 20.0]))
            .id(7.0)
            .build();
        feature.serialize_bbox = true;

        assert_eq!(
            serde_json::to_value(&feature).unwrap(),
            json!({
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [10.0, 20.0]},
                "id": 7.0,
                "bbox": [10.0, 20.0, 10.0, 20.0]
            })
        );
    }

    #[test]
    fn json_round_trip() {
        let mut properties = Properties::new();
        properties.set("name", "Tokyo").unwrap();
        properties.set("capital", true).unwrap();

        let feature = FeatureBuilder::new()
            .geometry(Point::must(&[139.75, 35.68, 40.0]))
            .properties(properties)
            .id(13.0)
            .build();

        let json = feature.to_json().unwrap();
        assert_eq!(Feature::from_json(&json).unwrap(), feature);
    }
}
