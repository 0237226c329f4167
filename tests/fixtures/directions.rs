//! Directions services with scripted behavior.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use pin_router::error::DirectionsError;
use pin_router::polyline::Polyline;
use pin_router::traits::{DirectionsService, Route, RoutePath, TransportMode};

fn key(coordinate: (f64, f64)) -> String {
    format!("{:.6},{:.6}", coordinate.0, coordinate.1)
}

/// A route that runs start -> midpoint -> end.
pub fn dogleg_route(start: (f64, f64), end: (f64, f64)) -> Route {
    let bend = (start.0, end.1);
    Route::new(vec![RoutePath {
        polyline: Polyline::new(vec![start, bend, end]),
        distance_meters: 100.0,
        duration_seconds: 10.0,
    }])
}

/// (start, end, mode) of every request, in call order.
pub type RequestLog = Arc<Mutex<Vec<((f64, f64), (f64, f64), TransportMode)>>>;

/// Answers immediately; requests starting at a listed coordinate fail.
#[derive(Default)]
pub struct ScriptedDirections {
    pub log: RequestLog,
    failing_starts: HashSet<String>,
    empty_starts: HashSet<String>,
}

impl ScriptedDirections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_from(mut self, start: (f64, f64)) -> Self {
        self.failing_starts.insert(key(start));
        self
    }

    /// Succeeds but with no candidate paths.
    pub fn empty_from(mut self, start: (f64, f64)) -> Self {
        self.empty_starts.insert(key(start));
        self
    }

    pub fn log(&self) -> RequestLog {
        Arc::clone(&self.log)
    }
}

impl DirectionsService for ScriptedDirections {
    fn request_route(
        &self,
        start: (f64, f64),
        end: (f64, f64),
        mode: TransportMode,
    ) -> Result<Route, DirectionsError> {
        self.log.lock().expect("log lock").push((start, end, mode));
        if self.failing_starts.contains(&key(start)) {
            return Err(DirectionsError::Status {
                code: "NoSegment".to_string(),
                message: None,
            });
        }
        if self.empty_starts.contains(&key(start)) {
            return Ok(Route::new(Vec::new()));
        }
        Ok(dogleg_route(start, end))
    }
}

/// Holds each request until the test releases the gate for its start.
pub struct GatedDirections {
    gates: Mutex<HashMap<String, Receiver<()>>>,
}

impl GatedDirections {
    /// One gate per start coordinate; sending on a returned sender lets the
    /// matching request complete.
    pub fn new(starts: &[(f64, f64)]) -> (Self, Vec<Sender<()>>) {
        let mut gates = HashMap::new();
        let mut releases = Vec::new();
        for start in starts {
            let (tx, rx) = mpsc::channel();
            gates.insert(key(*start), rx);
            releases.push(tx);
        }
        (
            Self {
                gates: Mutex::new(gates),
            },
            releases,
        )
    }
}

impl DirectionsService for GatedDirections {
    fn request_route(
        &self,
        start: (f64, f64),
        end: (f64, f64),
        _mode: TransportMode,
    ) -> Result<Route, DirectionsError> {
        let gate = self.gates.lock().expect("gate lock").remove(&key(start));
        if let Some(gate) = gate {
            gate.recv().map_err(|_| DirectionsError::NoRoute)?;
        }
        Ok(dogleg_route(start, end))
    }
}
