//! Error types for tally.

use thiserror::Error;

/// Errors that can occur while running tally.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Terminal setup, teardown, or event handling failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}
