//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the toolkit:
//! - Math types shared with the host (pointer positions)
//! - Logging utilities

pub mod math;
pub mod logging;
