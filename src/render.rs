//! Presentation values handed back to the surface.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::traits::MarkerHandle;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const PURPLE: Rgba = Rgba {
        r: 0.5,
        g: 0.0,
        b: 0.5,
        a: 1.0,
    };
}

/// Stroke style for overlay polylines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RendererStyle {
    pub line_width: f64,
    pub stroke: Rgba,
    pub alpha: f64,
}

impl Default for RendererStyle {
    fn default() -> Self {
        Self {
            line_width: 3.0,
            stroke: Rgba::PURPLE,
            alpha: 0.5,
        }
    }
}

/// "Drop-in" effect for a freshly rendered marker: the marker starts
/// `offset_y` units away from its resting frame and returns to it over
/// `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropAnimation {
    pub handle: MarkerHandle,
    /// Negative values start above the resting frame.
    pub offset_y: f64,
    pub duration: Duration,
}

impl DropAnimation {
    pub const DEFAULT_OFFSET_Y: f64 = -600.0;
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

    pub fn new(handle: MarkerHandle) -> Self {
        Self {
            handle,
            offset_y: Self::DEFAULT_OFFSET_Y,
            duration: Self::DEFAULT_DURATION,
        }
    }
}
