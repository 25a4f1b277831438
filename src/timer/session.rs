//! The stopwatch state machine.
//!
//! A [`TimerSession`] tracks wall-clock time for one timing session and
//! supports pausing and resuming. Paused time never counts toward the
//! elapsed total: a completed pause interval is committed to
//! `accumulated_pause` the moment it closes (on resume or stop), while an
//! open pause is subtracted live inside the elapsed query. That keeps
//! elapsed-time queries side-effect free even while paused.

use std::time::Instant;

use chrono::{DateTime, Local};
use tracing::debug;

/// State of a timer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Session is actively counting.
    Running,
    /// Session has an open pause interval.
    Paused,
    /// Session is finished. Terminal: every further transition is a no-op.
    Stopped,
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Stopped => write!(f, "Stopped"),
        }
    }
}

/// One timing session, created running.
///
/// All transitions are total: calling a transition that does not apply in
/// the current state is a no-op, never an error.
#[derive(Debug, Clone)]
pub struct TimerSession {
    /// Monotonic creation instant.
    start: Instant,
    /// Wall-clock creation time, kept for display only.
    started_at: DateTime<Local>,
    /// Whole seconds spent in completed pause intervals.
    accumulated_pause: u64,
    /// Start of the open pause interval. Some iff `state == Paused`.
    paused_since: Option<Instant>,
    /// Current state.
    state: TimerState,
}

impl TimerSession {
    /// Create a session that starts running now.
    #[must_use]
    pub fn new() -> Self {
        Self::started(Instant::now())
    }

    fn started(start: Instant) -> Self {
        Self {
            start,
            started_at: Local::now(),
            accumulated_pause: 0,
            paused_since: None,
            state: TimerState::Running,
        }
    }

    /// Pause the session. No-op unless running.
    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    fn pause_at(&mut self, now: Instant) {
        if self.state == TimerState::Running {
            debug!("timer state Running -> Paused");
            self.paused_since = Some(now);
            self.state = TimerState::Paused;
        }
    }

    /// Resume the session. No-op unless paused.
    pub fn resume(&mut self) {
        self.resume_at(Instant::now());
    }

    fn resume_at(&mut self, now: Instant) {
        if self.state == TimerState::Paused {
            debug!("timer state Paused -> Running");
            self.close_open_pause(now);
            self.state = TimerState::Running;
        }
    }

    /// Stop the session for good. Closes an open pause interval first so the
    /// pause accounting stays correct. No-op once stopped.
    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    fn stop_at(&mut self, now: Instant) {
        match self.state {
            TimerState::Running => {
                debug!("timer state Running -> Stopped");
                self.state = TimerState::Stopped;
            }
            TimerState::Paused => {
                debug!("timer state Paused -> Stopped");
                self.close_open_pause(now);
                self.state = TimerState::Stopped;
            }
            TimerState::Stopped => {}
        }
    }

    /// Pause if running, resume if paused. No-op once stopped.
    pub fn toggle_pause_resume(&mut self) {
        match self.state {
            TimerState::Running => self.pause(),
            TimerState::Paused => self.resume(),
            TimerState::Stopped => {}
        }
    }

    /// Commit the open pause interval to the accumulated total.
    ///
    /// # Panics
    ///
    /// Panics if no pause start was recorded. A paused session without one
    /// means the pause accounting is already corrupt, and continuing would
    /// silently freeze a wrong total into `accumulated_pause`.
    fn close_open_pause(&mut self, now: Instant) {
        let Some(paused_since) = self.paused_since.take() else {
            panic!("paused timer has no pause start recorded");
        };
        let pause = round_secs(now, paused_since);
        debug!(seconds = pause, "pause interval closed");
        self.accumulated_pause += pause;
    }

    /// Elapsed whole seconds, net of all paused time, rounded.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds_at(Instant::now())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    fn elapsed_seconds_at(&self, now: Instant) -> u64 {
        let wall = now.saturating_duration_since(self.start).as_secs_f64();
        let open_pause = self
            .paused_since
            .map_or(0.0, |since| now.saturating_duration_since(since).as_secs_f64());

        let elapsed = wall - self.accumulated_pause as f64 - open_pause;
        elapsed.max(0.0).round() as u64
    }

    /// Elapsed time as independently rounded hours, minutes, and seconds.
    ///
    /// Hours and minutes are each rounded from the total, not derived by
    /// successive division, so 89 elapsed seconds reports 1 minute while the
    /// hour count stays 0. The components need not be mutually consistent
    /// near rounding boundaries; this matches the historic display behavior.
    #[must_use]
    pub fn elapsed_breakdown(&self) -> (u64, u64, u64) {
        self.elapsed_breakdown_at(Instant::now())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    fn elapsed_breakdown_at(&self, now: Instant) -> (u64, u64, u64) {
        let seconds = self.elapsed_seconds_at(now);
        let minutes = (seconds as f64 / 60.0).round() as u64;
        let hours = (seconds as f64 / 3600.0).round() as u64;
        (hours, minutes, seconds)
    }

    /// Get the current state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Check if the session is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state == TimerState::Paused
    }

    /// Wall-clock time the session was created, for display.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }
}

impl Default for TimerSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole seconds between two instants, rounded.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_secs(now: Instant, earlier: Instant) -> u64 {
    now.saturating_duration_since(earlier).as_secs_f64().round() as u64
}
