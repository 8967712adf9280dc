//! Closed rings and their winding.

use std::ops::Deref;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::GeoJsonError;
use crate::geometry::{Coordinates, Vertices};

/// Minimum number of coordinates in a valid ring.
pub const LINEAR_RING_MINIMUM_SIZE: usize = 4;

/// Direction in which a ring's vertices are traversed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Winding {
    /// Clockwise; the role of a polygon's holes.
    Clockwise,
    /// Counterclockwise; the role of a polygon's outer boundary.
    CounterClockwise,
}

/// A closed loop of at least four vertices, the first and last of which are
/// equal.
///
/// Both invariants are established at construction and cannot be broken
/// afterwards; reorienting a ring only reverses the traversal order.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing(Vertices);

impl LinearRing {
    /// Creates a ring from the given vertices.
    ///
    /// Fails when fewer than [`LINEAR_RING_MINIMUM_SIZE`] vertices are given
    /// or when the first and last vertices differ.
    pub fn new(vertices: Vertices) -> Result<Self, GeoJsonError> {
        if vertices.len() < LINEAR_RING_MINIMUM_SIZE {
            return Err(GeoJsonError::LinearRingSize);
        }

        if vertices.first() != vertices.last() {
            return Err(GeoJsonError::LinearRingNotClosed);
        }

        Ok(Self(vertices))
    }

    /// Same as [`LinearRing::new`] but panics on invalid input.
    ///
    /// Reserved for statically known-valid vertex lists.
    pub fn must(vertices: Vertices) -> Self {
        match Self::new(vertices) {
            Ok(ring) => ring,
            Err(e) => panic!("invalid linear ring: {e}"),
        }
    }

    /// Signed shoelace area over consecutive vertex pairs, including the
    /// closing pair. Positive for counterclockwise winding.
    fn area_signed(&self) -> f64 {
        let mut aggr = 0.0;
        for pair in self.0.windows(2) {
            aggr += pair[0].longitude() * pair[1].latitude()
                - pair[1].longitude() * pair[0].latitude();
        }

        aggr / 2.0
    }

    /// Area enclosed by the ring.
    ///
    /// A self-intersecting ring may legitimately enclose zero area; that is
    /// not an error at this layer.
    pub fn area(&self) -> f64 {
        self.area_signed().abs()
    }

    /// Current winding of the ring. Zero signed area classifies as clockwise.
    pub fn winding(&self) -> Winding {
        if self.area_signed() > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    /// Whether the ring winds counterclockwise.
    pub fn is_counter_clockwise(&self) -> bool {
        self.winding() == Winding::CounterClockwise
    }

    /// Whether the ring winds clockwise.
    pub fn is_clockwise(&self) -> bool {
        self.winding() == Winding::Clockwise
    }

    /// Reverses the vertex order iff the current winding differs from the
    /// requested one. Idempotent.
    pub fn ensure_winding(&mut self, winding: Winding) {
        if self.winding() != winding {
            self.0.reverse();
        }
    }

    /// Consumes the ring, returning its vertices.
    pub fn into_vertices(self) -> Vertices {
        self.0
    }

    pub(crate) fn from_value(value: &Value) -> Result<Self, GeoJsonError> {
        let Value::Array(items) = value else {
            return Err(GeoJsonError::InvalidCoordinates);
        };

        let mut vertices = Vec::with_capacity(items.len());
        for item in items {
            vertices.push(Coordinates::from_value(item)?);
        }

        Self::new(vertices)
    }
}

impl Deref for LinearRing {
    type Target = Vertices;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Serialize for LinearRing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
