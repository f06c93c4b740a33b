//! Utility modules for common functionality
//!
//! This module provides the logging, progress and exit helpers used throughout the application.

pub mod logger;
pub(crate) mod progress;
pub mod exit_policy;
