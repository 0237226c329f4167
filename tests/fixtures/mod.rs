//! Test fixtures for pin-router.
//!
//! Provides:
//! - Real Las Vegas locations (from OpenStreetMap) that route with OSRM Nevada data
//! - A recording map surface with a fixed linear projection
//! - Scripted and gated directions services for completion-order tests
//! - OSRM dataset preparation for the container-backed tests

#![allow(dead_code)]

pub mod osrm_dataset;
pub mod directions;

pub use directions::*;
pub use las_vegas_locations::*;
pub use surface::*;
