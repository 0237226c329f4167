//! Geographic bounding regions and viewport padding.

use serde::{Deserialize, Serialize};

/// Axis-aligned lat/lng box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingRegion {
    /// Region enclosing all points. `None` for an empty slice.
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut region = Self {
            min_lat: first.0,
            max_lat: first.0,
            min_lng: first.1,
            max_lng: first.1,
        };
        for &(lat, lng) in rest {
            region.min_lat = region.min_lat.min(lat);
            region.max_lat = region.max_lat.max(lat);
            region.min_lng = region.min_lng.min(lng);
            region.max_lng = region.max_lng.max(lng);
        }
        Some(region)
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// (latitude delta, longitude delta).
    pub fn span(&self) -> (f64, f64) {
        (self.max_lat - self.min_lat, self.max_lng - self.min_lng)
    }

    pub fn contains(&self, point: (f64, f64)) -> bool {
        let (lat, lng) = point;
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

/// Screen-space insets applied when fitting a region into the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgePadding {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgePadding {
    pub const fn uniform(inset: f64) -> Self {
        Self {
            top: inset,
            left: inset,
            bottom: inset,
            right: inset,
        }
    }
}

impl Default for EdgePadding {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}
