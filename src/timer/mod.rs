//! Stopwatch core: the timer state machine and the completed-session log.

pub mod log;
pub mod session;

pub use log::SessionLog;
pub use session::{TimerSession, TimerState};
