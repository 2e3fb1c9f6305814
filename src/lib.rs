//! Pointer-driven 2D vector drawing with a global affine transform pipeline.

pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod script;
pub mod session;
pub mod tools;
pub mod transform;
