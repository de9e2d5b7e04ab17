//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and small vector helpers
//! - Generational handles for scene nodes
//! - Frame timing
//! - Logging setup

pub mod collections;
pub mod logging;
pub mod math;
pub mod time;
