//! Shape rendering module
//!
//! This module contains:
//! - The drawing surface trait and a call-recording surface
//! - Path geometry shared between surfaces
//! - Replay of the shape list onto a surface
//! - Raster rendering using tiny-skia (for writing images to disk)

pub mod geometry;
pub mod image;
pub mod replay;
pub mod surface;

pub use replay::{render, stroke_shape};
pub use surface::{DrawingSurface, RecordingSurface, StrokeCall};
