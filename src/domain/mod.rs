//! Pure domain types with minimal dependencies
//!
//! This module contains the geometry and shape types used throughout the crate.
//! Types here should have no rendering or I/O dependencies so the session
//! logic can be exercised without a drawing surface.

pub mod geometry;
pub mod shape;

pub use geometry::*;
pub use shape::*;
