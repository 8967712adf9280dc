//! Axis-aligned extents derived from vertex sets.

use serde::{Deserialize, Serialize};

use crate::geometry::Coordinates;

const BBOX_SIZE_2D: usize = 4;
const BBOX_SIZE_3D: usize = 6;

/// Axis-aligned extent of a vertex set.
///
/// Either empty, 2D (`[minLng, minLat, maxLng, maxLat]`) or 3D
/// (`[minLng, minLat, minAlt, maxLng, maxLat, maxAlt]`). A bounding box is
/// always derived from a geometry's vertices on request, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox(Vec<f64>);

impl BoundingBox {
    /// Computes the bounding box of the given vertices.
    ///
    /// The result has an altitude channel iff at least one vertex carries an
    /// altitude. When only some vertices do, the altitude range is widened to
    /// include 0, standing in for the vertices that lack one; the vertices
    /// themselves are not altered. A vertex set where every vertex carries an
    /// altitude skips the widening.
    pub fn from_vertices(vertices: &[Coordinates]) -> Self {
        let Some(first) = vertices.first() else {
            return Self(Vec::new());
        };

        let mut min_lng = first.longitude();
        let mut min_lat = first.latitude();
        let mut max_lng = first.longitude();
        let mut max_lat = first.latitude();
        let mut min_alt = f64::MAX;
        let mut max_alt = f64::MIN;
        let mut with_altitude = 0;

        for vertex in vertices {
            if vertex.longitude() < min_lng {
                min_lng = vertex.longitude();
            }
            if vertex.latitude() < min_lat {
                min_lat = vertex.latitude();
            }
            if vertex.longitude() > max_lng {
                max_lng = vertex.longitude();
            }
            if vertex.latitude() > max_lat {
                max_lat = vertex.latitude();
            }

            if let Some(altitude) = vertex.altitude() {
                with_altitude += 1;

                if altitude < min_alt {
                    min_alt = altitude;
                }
                if altitude > max_alt {
                    max_alt = altitude;
                }
            }
        }

        if with_altitude == 0 {
            return Self(vec![min_lng, min_lat, max_lng, max_lat]);
        }

        // Vertices without an altitude count as altitude 0 for the range
        // only.
        if with_altitude != vertices.len() {
            min_alt = min_alt.min(0.0);
            max_alt = max_alt.max(0.0);
        }

        Self(vec![min_lng, min_lat, min_alt, max_lng, max_lat, max_alt])
    }

    /// Whether this is a 2D bounding box.
    pub fn is_2d(&self) -> bool {
        self.0.len() == BBOX_SIZE_2D
    }

    /// Whether this is a 3D bounding box.
    pub fn is_3d(&self) -> bool {
        self.0.len() == BBOX_SIZE_3D
    }

    /// Whether the bounding box contains no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the bounding box is empty, 2D or 3D.
    pub fn is_valid(&self) -> bool {
        self.is_empty() || self.is_2d() || self.is_3d()
    }

    /// The raw values in `[minLng, minLat, (minAlt), maxLng, maxLat,
    /// (maxAlt)]` order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}
