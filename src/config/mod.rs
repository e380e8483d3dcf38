//! Configuration module for Grawt
//!
//! This module handles loading, parsing, and validating the TOML configuration
//! file. A missing file is replaced by an empty one and reported as
//! [`ConfigError::Created`](crate::ConfigError::Created) so the caller can ask
//! the user to fill it in.
//!
//! # Example
//!
//! ```no_run
//! use grawt::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Seen URLs are stored at: {}", config.urls_file_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::Config;

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, DEFAULT_CONFIG_PATH};
