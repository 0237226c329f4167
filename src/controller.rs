//! Map interaction controller.
//!
//! Owns the marker sequence, turns qualifying long presses into markers and
//! turns the marker sequence into overlays: one straight polyline, or one
//! routed polyline per consecutive marker pair.
//!
//! Every directions request runs on its own thread and reports back over a
//! channel, so a hung request never holds up another. Completions are applied
//! on the caller's thread, in arrival order, whenever the host pumps them with
//! [`MapInteractionController::poll_route_completions`] or
//! [`MapInteractionController::wait_route_completion`]. In-flight requests are
//! never cancelled; a completion that lands after `clear_all` still adds its
//! overlay.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::DirectionsError;
use crate::gesture::{DEFAULT_MIN_PRESS_DURATION, LongPressEvent, LongPressRecognizer};
use crate::polyline::{Overlay, Polyline};
use crate::region::EdgePadding;
use crate::render::{DropAnimation, RendererStyle};
use crate::traits::{
    DirectionsService, MapSurface, MarkerHandle, OverlayLevel, Route, ScreenPoint,
    SurfaceDelegate, TransportMode,
};

/// A user-placed pin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub handle: MarkerHandle,
    /// (lat, lng)
    pub coordinate: (f64, f64),
}

/// A directions request between two adjacent markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSegment {
    /// Position of `start` in the marker sequence.
    pub index: usize,
    pub start: Marker,
    pub end: Marker,
}

/// Outcome of one directions request.
#[derive(Debug)]
pub struct RouteCompletion {
    pub segment: RouteSegment,
    pub result: Result<Route, DirectionsError>,
}

/// Tunables for [`MapInteractionController`].
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Minimum hold before a press places a marker.
    pub min_press_duration: Duration,
    /// Padding around the markers when fitting the viewport.
    pub edge_padding: EdgePadding,
    /// Travel mode passed to every directions request.
    pub transport_mode: TransportMode,
    /// Stroke handed back for every overlay.
    pub renderer_style: RendererStyle,
    pub drop_offset_y: f64,
    pub drop_duration: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            min_press_duration: DEFAULT_MIN_PRESS_DURATION,
            edge_padding: EdgePadding::default(),
            transport_mode: TransportMode::Driving,
            renderer_style: RendererStyle::default(),
            drop_offset_y: DropAnimation::DEFAULT_OFFSET_Y,
            drop_duration: DropAnimation::DEFAULT_DURATION,
        }
    }
}

/// Mediates between long presses, the marker sequence, a [`MapSurface`] and a
/// [`DirectionsService`].
///
/// The marker sequence is owned here and only changes through the methods
/// below.
pub struct MapInteractionController<S, D> {
    surface: S,
    directions: Arc<D>,
    config: ControllerConfig,
    recognizer: LongPressRecognizer,
    markers: Vec<Marker>,
    next_handle: u64,
    completions_tx: Sender<RouteCompletion>,
    completions_rx: Receiver<RouteCompletion>,
}

impl<S, D> MapInteractionController<S, D>
where
    S: MapSurface,
    D: DirectionsService + 'static,
{
    pub fn new(surface: S, directions: D, config: ControllerConfig) -> Self {
        let (completions_tx, completions_rx) = mpsc::channel();

        Self {
            surface,
            directions: Arc::new(directions),
            recognizer: LongPressRecognizer::new(config.min_press_duration),
            config,
            markers: Vec::new(),
            next_handle: 0,
            completions_tx,
            completions_rx,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Markers in placement order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Consecutive marker pairs `(i, i + 1)`. Empty for fewer than two markers.
    pub fn route_segments(&self) -> Vec<RouteSegment> {
        self.markers
            .windows(2)
            .enumerate()
            .map(|(index, pair)| RouteSegment {
                index,
                start: pair[0],
                end: pair[1],
            })
            .collect()
    }

    /// Feed a raw press event; places a marker when the press qualifies.
    pub fn handle_long_press(&mut self, event: &LongPressEvent) -> Option<MarkerHandle> {
        let point = self.recognizer.handle(event)?;
        Some(self.place_marker(point))
    }

    pub fn place_marker(&mut self, point: ScreenPoint) -> MarkerHandle {
        let coordinate = self.surface.convert_screen_point(point);
        let marker = Marker {
            handle: MarkerHandle(self.next_handle),
            coordinate,
        };
        self.next_handle += 1;
        self.markers.push(marker);
        self.surface.show_annotations(&[marker], true);

        debug!(
            handle = marker.handle.0,
            lat = coordinate.0,
            lng = coordinate.1,
            count = self.markers.len(),
            "placed marker"
        );
        marker.handle
    }

    /// Replace all overlays with one straight polyline through the markers.
    ///
    /// With fewer than two markers the overlays are cleared and nothing is
    /// drawn. Returns whether a polyline was added.
    pub fn draw_straight_route(&mut self) -> bool {
        self.surface.remove_overlays();

        let polyline = self.marker_polyline();
        if polyline.is_degenerate() {
            debug!(count = self.markers.len(), "not enough markers for a polyline");
            return false;
        }

        self.fit_viewport_to(&polyline);
        debug!(points = polyline.len(), "drawing straight route");
        self.surface.add_overlay(Overlay::Polyline(polyline), OverlayLevel::AboveLabels);
        true
    }

    /// Replace all overlays with routed segments between consecutive markers.
    ///
    /// The viewport is fitted to the straight-line extent of the markers, not
    /// to the routes that eventually come back. Each segment is requested on
    /// its own thread with no ordering between them. Returns the number of
    /// directions requests issued.
    pub fn draw_routed_path(&mut self) -> usize {
        self.surface.remove_overlays();

        let segments = self.route_segments();
        if segments.is_empty() {
            debug!(count = self.markers.len(), "not enough markers for a routed path");
            return 0;
        }

        let polyline = self.marker_polyline();
        self.fit_viewport_to(&polyline);

        let mode = self.config.transport_mode;
        info!(segments = segments.len(), mode = ?mode, "requesting directions");

        let mut issued = 0;
        for segment in segments {
            let directions = Arc::clone(&self.directions);
            let completions = self.completions_tx.clone();
            let spawned = thread::Builder::new()
                .name(format!("directions-{}", segment.index))
                .spawn(move || {
                    let (start, end) = (segment.start.coordinate, segment.end.coordinate);
                    let result = directions.request_route(start, end, mode);
                    // The receiver only disappears with the controller itself.
                    let _ = completions.send(RouteCompletion { segment, result });
                });

            match spawned {
                Ok(_) => issued += 1,
                Err(err) => {
                    warn!(
                        segment = segment.index,
                        error = %err,
                        "could not start directions request"
                    );
                }
            }
        }
        issued
    }

    /// Remove every overlay and marker. Safe to call repeatedly.
    pub fn clear_all(&mut self) {
        self.surface.remove_overlays();
        let handles = self.markers.iter().map(|marker| marker.handle).collect::<Vec<_>>();
        self.surface.remove_annotations(&handles);
        self.markers.clear();
        debug!(removed = handles.len(), "cleared map");
    }

    /// Apply every completion that has already arrived, without blocking.
    ///
    /// Returns the number of completions applied.
    pub fn poll_route_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply_completion(completion);
            applied += 1;
        }
        applied
    }

    /// Block up to `timeout` for the next completion and apply it.
    pub fn wait_route_completion(&mut self, timeout: Duration) -> bool {
        match self.completions_rx.recv_timeout(timeout) {
            Ok(completion) => {
                self.apply_completion(completion);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    fn apply_completion(&mut self, completion: RouteCompletion) {
        let RouteCompletion { segment, result } = completion;
        let path = match result {
            Ok(route) => route.into_primary(),
            Err(err) => {
                warn!(segment = segment.index, error = %err, "directions request failed");
                return;
            }
        };

        match path {
            Some(path) => {
                debug!(
                    segment = segment.index,
                    points = path.polyline.len(),
                    distance_m = path.distance_meters,
                    "adding routed segment"
                );
                self.surface.add_overlay(
                    Overlay::Routed {
                        segment,
                        polyline: path.polyline,
                    },
                    OverlayLevel::AboveRoads,
                );
            }
            None => {
                let err = DirectionsError::NoRoute;
                warn!(segment = segment.index, error = %err, "directions request failed");
            }
        }
    }

    fn marker_polyline(&self) -> Polyline {
        Polyline::new(self.markers.iter().map(|marker| marker.coordinate).collect())
    }

    fn fit_viewport_to(&mut self, polyline: &Polyline) {
        if let Some(region) = polyline.bounding_region() {
            self.surface.fit_viewport(region, self.config.edge_padding, true);
        }
    }
}

impl<S, D> SurfaceDelegate for MapInteractionController<S, D> {
    fn renderer_for_overlay(&self, _overlay: &Overlay) -> RendererStyle {
        self.config.renderer_style
    }

    fn annotations_rendered(&self, handles: &[MarkerHandle]) -> Option<DropAnimation> {
        let newest = handles.iter().max()?;
        Some(DropAnimation {
            handle: *newest,
            offset_y: self.config.drop_offset_y,
            duration: self.config.drop_duration,
        })
    }
}
