//! pin-router core
//!
//! Drop pins on a map surface and connect them with a straight polyline or
//! with driving directions between consecutive pins.

pub mod traits;
pub mod error;
pub mod polyline;
pub mod region;
pub mod gesture;
pub mod render;
pub mod controller;
pub mod osrm;
