//! Core seams between the interaction controller and its collaborators.
//!
//! The map surface and the directions backend are opaque services. Hosts
//! implement [`MapSurface`] for their rendering engine and [`DirectionsService`]
//! for their routing backend; the controller only talks to these traits.

use serde::{Deserialize, Serialize};

use crate::controller::Marker;
use crate::error::DirectionsError;
use crate::polyline::{Overlay, Polyline};
use crate::region::{BoundingRegion, EdgePadding};
use crate::render::{DropAnimation, RendererStyle};

/// A point in the surface's screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Opaque render handle attached to a marker.
///
/// Handles are assigned in creation order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(pub u64);

/// Travel mode requested from a directions backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportMode {
    Driving,
    Walking,
    Transit,
}

/// Stacking level for an overlay relative to the base map layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayLevel {
    /// Above roads, below road labels.
    AboveRoads,
    /// Above roads and labels.
    AboveLabels,
}

/// Rendering surface the controller draws markers and overlays onto.
pub trait MapSurface {
    /// Convert a screen point to a (lat, lng) coordinate.
    ///
    /// Infallible: points outside the visible area still map to a coordinate.
    fn convert_screen_point(&self, point: ScreenPoint) -> (f64, f64);

    /// Render markers and adjust the viewport so they stay visible.
    fn show_annotations(&mut self, markers: &[Marker], animated: bool);

    /// Remove the listed markers. Unknown handles are ignored.
    fn remove_annotations(&mut self, handles: &[MarkerHandle]);

    /// Draw an overlay at the given stacking level.
    fn add_overlay(&mut self, overlay: Overlay, level: OverlayLevel);

    /// Remove every overlay currently on the surface.
    fn remove_overlays(&mut self);

    /// Move the viewport so `region` is visible inside `padding`.
    fn fit_viewport(&mut self, region: BoundingRegion, padding: EdgePadding, animated: bool);
}

/// Callbacks a surface fires back into whoever drives it.
pub trait SurfaceDelegate {
    /// Style used to stroke an overlay.
    fn renderer_for_overlay(&self, overlay: &Overlay) -> RendererStyle;

    /// Fired once the surface has finished rendering newly added markers.
    fn annotations_rendered(&self, handles: &[MarkerHandle]) -> Option<DropAnimation>;
}

/// One candidate path returned by a directions backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    pub polyline: Polyline,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

/// A directions response. Candidates are ordered by backend preference.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub paths: Vec<RoutePath>,
}

impl Route {
    pub fn new(paths: Vec<RoutePath>) -> Self {
        Self { paths }
    }

    /// The backend's preferred candidate.
    pub fn primary(&self) -> Option<&RoutePath> {
        self.paths.first()
    }

    pub fn into_primary(self) -> Option<RoutePath> {
        self.paths.into_iter().next()
    }
}

/// Computes a route between two coordinates.
///
/// Implementations may block; the controller runs every request on its own
/// worker so calls never stall the caller.
pub trait DirectionsService: Send + Sync {
    fn request_route(
        &self,
        start: (f64, f64),
        end: (f64, f64),
        mode: TransportMode,
    ) -> Result<Route, DirectionsError>;
}
