//! Configuration module for the scraper
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so running without a file
//! targets docs.python.org and peps.python.org.
//!
//! # Example
//!
//! ```no_run
//! use pydocs_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Cache lives at: {}", config.cache.path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CacheConfig, Config, HttpConfig, LoggingConfig, OutputConfig, SitesConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{load_config, load_or_default, parse_config};
