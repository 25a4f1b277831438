//! tally - a terminal stopwatch for tracking work sessions
//!
//! Tracks elapsed wall-clock time for a sequence of timer sessions, with
//! single-key pause/resume and session switching, rendered as a full-screen
//! terminal UI.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod timer;
pub mod tui;

pub use config::Config;
pub use error::TallyError;
pub use timer::{SessionLog, TimerSession, TimerState};
