//! GeoJSON format reader and writer.
//!
//! This crate provides a typed, validating in-memory model of GeoJSON
//! (RFC 7946) documents and losslessly round-trips them through JSON. The
//! structural invariants of the format are enforced at construction and at
//! decode: coordinate ranges, minimum vertex counts, ring closure, and ring
//! winding (outer boundaries counterclockwise, holes clockwise).
//!
//! Decoding is type-directed: a document's `type` tag selects the concrete
//! [`Geometry`] variant, with [`GeometryCollection`] children decoded
//! recursively. Validation failures are reported through the
//! [`GeoJsonError`] enum, one variant per violation, and a decode fails
//! atomically on the first one.
//!
//! ```
//! use carta_geojson::GeoJsonObject;
//!
//! let object = GeoJsonObject::from_json(
//!     r#"{
//!         "type": "Feature",
//!         "geometry": {"type": "Point", "coordinates": [139.75, 35.68]},
//!         "properties": {"name": "Tokyo"}
//!     }"#,
//! )?;
//!
//! let feature = object.feature()?;
//! let point = feature.geometry.as_point()?;
//! assert_eq!(point.longitude(), 139.75);
//! assert_eq!(feature.properties.get_string("name")?, "Tokyo");
//! # Ok::<(), carta_geojson::GeoJsonError>(())
//! ```
//!
//! All types own their data outright and contain no interior mutability, so
//! sharing immutable values across threads is safe; mutation requires
//! exclusive access as usual.

pub mod error;
pub mod feature;
pub mod geometry;

mod document;

pub use error::GeoJsonError;
pub use feature::{
    Feature, FeatureBuilder, FeatureCollection, FeatureId, GeoJsonObject, ObjectType, Properties,
};
pub use geometry::{
    BoundingBox, Coordinates, Geometry, GeometryCollection, GeometryObject, GeometryType,
    LineString, LinearRing, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Segments,
    SegmentsBuilder, Vertices, VerticesBuilder, Winding,
};
