//! Lapse engine crate.
//!
//! This crate owns the drawing substrate used by the countdown view layer:
//! geometry, color, the recorded draw stream, the CPU rasterizer, the
//! surface abstraction, text, pacing, and logging.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod scene;
pub mod surface;
pub mod text;
pub mod time;
