//! Configuration module for quotegrab
//!
//! This module handles loading, parsing, and validating JSON configuration files.
//!
//! # Example
//!
//! ```no_run
//! use quotegrab::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.json")).unwrap();
//! println!("Scraping from: {}", config.scrape.start_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ScrapeConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
