//! Configuration management for tally.
//!
//! This module handles loading and saving configuration from `~/.tally/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::Config;
