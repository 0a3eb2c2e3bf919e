//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Result model (Resolution, Report)
//! - Error types
//! - Rendering functions for different output formats
//! - Progress display
//! - Tracing setup

pub mod error;
pub mod logger;
pub mod model;
pub mod progress;
pub mod render;
