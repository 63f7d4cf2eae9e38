//! Configuration module for childshare
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ChildsharePaths;
pub use settings::Settings;
