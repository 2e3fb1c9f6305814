//! Drawing tools
//!
//! This module provides the message handlers that drive shape construction:
//! single-stroke drags, polygon click accumulation and global transforms.

pub mod handlers;
