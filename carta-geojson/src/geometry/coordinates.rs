//! Positions and the vertex lists built from them.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::GeoJsonError;

/// Minimum valid longitude.
pub const LONGITUDE_MIN: f64 = -180.0;
/// Maximum valid longitude.
pub const LONGITUDE_MAX: f64 = 180.0;
/// Minimum valid latitude.
pub const LATITUDE_MIN: f64 = -90.0;
/// Maximum valid latitude.
pub const LATITUDE_MAX: f64 = 90.0;

/// A validated position: longitude, latitude and optional altitude.
///
/// The 2D/3D distinction is preserved through encode and decode; a 2D
/// position is never equal to a 3D one, even with equal longitude and
/// latitude. Serialized as an array of 2 or 3 numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    longitude: f64,
    latitude: f64,
    altitude: Option<f64>,
}

impl Coordinates {
    /// Creates coordinates from a `[longitude, latitude]` or
    /// `[longitude, latitude, altitude]` slice.
    ///
    /// Longitude must lie in [-180, 180] and latitude in [-90, 90]; altitude
    /// is unconstrained.
    pub fn new(values: &[f64]) -> Result<Self, GeoJsonError> {
        let (longitude, latitude, altitude) = match *values {
            [longitude, latitude] => (longitude, latitude, None),
            [longitude, latitude, altitude] => (longitude, latitude, Some(altitude)),
            _ => return Err(GeoJsonError::CoordinatesSize),
        };

        if !(LONGITUDE_MIN..=LONGITUDE_MAX).contains(&longitude) {
            return Err(GeoJsonError::LongitudeRange);
        }

        if !(LATITUDE_MIN..=LATITUDE_MAX).contains(&latitude) {
            return Err(GeoJsonError::LatitudeRange);
        }

        Ok(Self {
            longitude,
            latitude,
            altitude,
        })
    }

    /// Same as [`Coordinates::new`] but panics on invalid input.
    ///
    /// Reserved for statically known-valid values such as test fixtures;
    /// never call it on decoded or otherwise untrusted input.
    pub fn must(values: &[f64]) -> Self {
        match Self::new(values) {
            Ok(coordinates) => coordinates,
            Err(e) => panic!("invalid coordinates: {e}"),
        }
    }

    /// Longitude of the position.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude of the position.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Altitude of the position, if it has one.
    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// Whether the position carries an altitude.
    pub fn has_altitude(&self) -> bool {
        self.altitude.is_some()
    }

    pub(crate) fn from_value(value: &Value) -> Result<Self, GeoJsonError> {
        let Value::Array(items) = value else {
            return Err(GeoJsonError::InvalidCoordinates);
        };

        if items.len() != 2 && items.len() != 3 {
            return Err(GeoJsonError::CoordinatesSize);
        }

        let mut numbers = Vec::with_capacity(items.len());
        for item in items {
            let Some(number) = item.as_f64() else {
                return Err(GeoJsonError::InvalidCoordinates);
            };

            numbers.push(number);
        }

        Self::new(&numbers)
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.altitude {
            Some(altitude) => write!(f, "[ {}, {}, {} ]", self.longitude, self.latitude, altitude),
            None => write!(f, "[ {}, {} ]", self.longitude, self.latitude),
        }
    }
}

impl Serialize for Coordinates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.altitude {
            Some(altitude) => [self.longitude, self.latitude, altitude].serialize(serializer),
            None => [self.longitude, self.latitude].serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        Self::new(&values).map_err(serde::de::Error::custom)
    }
}

/// Ordered list of [`Coordinates`]; the point data behind every geometry.
pub type Vertices = Vec<Coordinates>;

/// Fluent accumulator for [`Vertices`].
///
/// The first failed [`push`](VerticesBuilder::push) latches its error; later
/// calls become no-ops and the error surfaces at
/// [`build`](VerticesBuilder::build).
#[derive(Debug, Default)]
pub struct VerticesBuilder {
    vertices: Vertices,
    error: Option<GeoJsonError>,
}

impl VerticesBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates one coordinates array and appends it to the list.
    pub fn push(mut self, values: &[f64]) -> Self {
        if self.error.is_some() {
            return self;
        }

        match Coordinates::new(values) {
            Ok(coordinates) => self.vertices.push(coordinates),
            Err(e) => self.error = Some(e),
        }

        self
    }

    /// Returns the accumulated vertices, or the first error encountered.
    pub fn build(self) -> Result<Vertices, GeoJsonError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.vertices),
        }
    }
}
