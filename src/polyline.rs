//! Polylines and the overlays built from them.
//!
//! A polyline is kept as decoded coordinates. Backend wire formats are
//! translated at the adapter boundary (see `osrm`), never in here.

use serde::{Deserialize, Serialize};

use crate::controller::RouteSegment;
use crate::region::BoundingRegion;

/// An ordered sequence of (latitude, longitude) points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a polyline from (latitude, longitude) points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A polyline with fewer than two points draws nothing.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// Smallest region enclosing every point, `None` when empty.
    pub fn bounding_region(&self) -> Option<BoundingRegion> {
        BoundingRegion::from_points(&self.points)
    }
}

/// A drawable decoration on the map surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// Straight line through the markers in placement order.
    Polyline(Polyline),
    /// Path returned by a directions backend for one segment.
    Routed {
        segment: RouteSegment,
        polyline: Polyline,
    },
}

impl Overlay {
    /// Geometry of the overlay, whichever kind it is.
    pub fn polyline(&self) -> &Polyline {
        match self {
            Overlay::Polyline(polyline) => polyline,
            Overlay::Routed { polyline, .. } => polyline,
        }
    }

    /// The segment a routed overlay answers, `None` for the straight line.
    pub fn segment(&self) -> Option<&RouteSegment> {
        match self {
            Overlay::Polyline(_) => None,
            Overlay::Routed { segment, .. } => Some(segment),
        }
    }
}
