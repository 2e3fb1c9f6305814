//! Drawing session management module
//!
//! This module contains:
//! - The committed shape list and the in-progress gesture state
//! - Message types delivered by the pointer source, kind selector and command triggers

pub mod messages;
pub mod state;
