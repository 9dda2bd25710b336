//! Configuration module for stepform
//!
//! This module provides configuration management including:
//! - Platform config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::StepformPaths;
pub use settings::Settings;
