//! Core application module
//!
//! This module contains the application loop that ties canvas state to a
//! concrete drawing surface.

pub mod app;
