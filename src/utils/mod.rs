//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting and I/O helpers used
//! throughout the application.

pub mod logger;
pub(crate) mod progress;
pub mod io_utils;
