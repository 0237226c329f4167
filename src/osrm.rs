//! OSRM HTTP adapter for driving directions.

use serde::Deserialize;

use crate::error::DirectionsError;
use crate::polyline::Polyline;
use crate::traits::{DirectionsService, Route, RoutePath, TransportMode};

const ROUTE_QUERY: &str = "overview=full&geometries=geojson&alternatives=false";

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    /// Routing profile used for `TransportMode::Driving`.
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmDirections {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmDirections {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, start: (f64, f64), end: (f64, f64)) -> String {
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            start.1,
            start.0,
            end.1,
            end.0,
            ROUTE_QUERY
        )
    }
}

impl DirectionsService for OsrmDirections {
    fn request_route(
        &self,
        start: (f64, f64),
        end: (f64, f64),
        mode: TransportMode,
    ) -> Result<Route, DirectionsError> {
        if mode != TransportMode::Driving {
            return Err(DirectionsError::UnsupportedMode(mode));
        }

        // OSRM reports routing failures as JSON with a 4xx status, so the body
        // is decoded before the status is judged.
        let body = self
            .client
            .get(self.route_url(start, end))
            .send()?
            .json::<OsrmRouteResponse>()?;

        body.into_route()
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
    distance: f64,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    /// GeoJSON positions, `[lng, lat]`.
    coordinates: Vec<[f64; 2]>,
}

impl OsrmRouteResponse {
    fn into_route(self) -> Result<Route, DirectionsError> {
        if self.code != "Ok" {
            return Err(DirectionsError::Status {
                code: self.code,
                message: self.message,
            });
        }
        if self.routes.is_empty() {
            return Err(DirectionsError::NoRoute);
        }

        let paths = self
            .routes
            .into_iter()
            .map(|route| RoutePath {
                polyline: Polyline::new(
                    route
                        .geometry
                        .coordinates
                        .into_iter()
                        .map(|[lng, lat]| (lat, lng))
                        .collect(),
                ),
                distance_meters: route.distance,
                duration_seconds: route.duration,
            })
            .collect();

        Ok(Route::new(paths))
    }
}
