//! Application state for the stopwatch screen.

use crate::timer::{SessionLog, TimerSession};
use crate::tui::event::Action;

/// What the main loop should do after an action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep ticking.
    Continue,
    /// Leave the loop and show the summary screen.
    Summarize,
    /// Leave the loop without a summary.
    Exit,
}

/// Application state: the completed-session log plus the session being timed.
///
/// The app owns both exclusively; archiving a session records its total in
/// the log and replaces it outright, so nothing else ever holds a reference
/// to a finished session.
pub struct App {
    /// Completed session totals, oldest first.
    pub log: SessionLog,
    /// The session currently being timed.
    pub active: TimerSession,
    /// 1-based number of the active session, for the header.
    pub session_number: usize,
}

impl App {
    /// Create the app with an empty log and a running first session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: SessionLog::new(),
            active: TimerSession::new(),
            session_number: 1,
        }
    }

    /// Apply one dispatched action and report how the loop should proceed.
    pub fn apply(&mut self, action: Action) -> Flow {
        match action {
            Action::Quit => {
                self.archive_active();
                Flow::Summarize
            }
            Action::NewSession => {
                self.archive_active();
                self.active = TimerSession::new();
                self.session_number += 1;
                Flow::Continue
            }
            Action::TogglePause => {
                self.active.toggle_pause_resume();
                Flow::Continue
            }
            Action::Interrupt => Flow::Exit,
        }
    }

    /// Record the active session's total and mark it finished.
    fn archive_active(&mut self) {
        self.log.record(self.active.elapsed_seconds());
        self.active.stop();
    }

    /// Summary lines for the exit screen: one per archived session, then the
    /// combined total, all as rounded minutes.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .log
            .entries()
            .iter()
            .enumerate()
            .map(|(i, &seconds)| {
                format!("Timer {}: {} minutes elapsed", i + 1, round_minutes(seconds))
            })
            .collect();

        lines.push(format!(
            "Total time spent: {} minutes",
            round_minutes(self.log.total_seconds())
        ));

        lines
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole minutes, rounded from seconds.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[allow(clippy::cast_precision_loss)]
fn round_minutes(seconds: u64) -> u64 {
    (seconds as f64 / 60.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerState;

    #[test]
    fn test_toggle_then_new_then_quit_archives_two_sessions() {
        let mut app = App::new();

        assert_eq!(app.apply(Action::TogglePause), Flow::Continue);
        assert_eq!(app.active.state(), TimerState::Paused);

        assert_eq!(app.apply(Action::NewSession), Flow::Continue);
        assert_eq!(app.log.len(), 1);
        assert_eq!(app.active.state(), TimerState::Running);
        assert_eq!(app.session_number, 2);

        assert_eq!(app.apply(Action::Quit), Flow::Summarize);
        assert_eq!(app.log.len(), 2);

        // Nothing measurable elapsed in this test, per entry or in total.
        assert_eq!(app.log.entries(), &[0, 0]);
        assert_eq!(app.log.total_seconds(), 0);
    }

    #[test]
    fn test_toggle_pause_flips_active_state() {
        let mut app = App::new();

        app.apply(Action::TogglePause);
        assert!(app.active.is_paused());

        app.apply(Action::TogglePause);
        assert_eq!(app.active.state(), TimerState::Running);
        assert!(app.log.is_empty());
    }

    #[test]
    fn test_interrupt_leaves_state_untouched() {
        let mut app = App::new();

        assert_eq!(app.apply(Action::Interrupt), Flow::Exit);
        assert!(app.log.is_empty());
        assert_eq!(app.active.state(), TimerState::Running);
        assert_eq!(app.session_number, 1);
    }

    #[test]
    fn test_summary_lines_list_sessions_and_total() {
        let mut app = App::new();
        app.log.record(120);
        app.log.record(61);

        let lines = app.summary_lines();

        assert_eq!(
            lines,
            vec![
                "Timer 1: 2 minutes elapsed".to_string(),
                "Timer 2: 1 minutes elapsed".to_string(),
                "Total time spent: 3 minutes".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_lines_empty_log_still_shows_total() {
        let app = App::new();

        assert_eq!(app.summary_lines(), vec!["Total time spent: 0 minutes".to_string()]);
    }

    #[test]
    fn test_round_minutes() {
        assert_eq!(round_minutes(0), 0);
        assert_eq!(round_minutes(29), 0);
        assert_eq!(round_minutes(89), 1);
        assert_eq!(round_minutes(121), 2);
    }
}
