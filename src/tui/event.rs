//! Event handling for the stopwatch screen.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::error::TallyError;

/// Action to take after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Archive the active session and show the summary screen.
    Quit,
    /// Archive the active session and start timing a fresh one.
    NewSession,
    /// Pause the active session, or resume it if paused.
    TogglePause,
    /// Tear down the terminal and exit without a summary.
    Interrupt,
}

/// Poll for one key event, waiting at most `tick`.
///
/// Returns the mapped action, or None if no key arrived within the tick or
/// the key is unmapped. The tick-length timeout doubles as the loop's sleep.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_action(tick: Duration) -> Result<Option<Action>, TallyError> {
    if event::poll(tick).map_err(|e| TallyError::Terminal(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| TallyError::Terminal(format!("Event read failed: {e}")))?
        {
            return Ok(map_key(key));
        }
    }

    Ok(None)
}

/// Block until any key is pressed. Used by the exit screen.
///
/// # Errors
///
/// Returns an error if event reading fails.
pub fn wait_for_key() -> Result<(), TallyError> {
    loop {
        if let Event::Key(_) =
            event::read().map_err(|e| TallyError::Terminal(format!("Event read failed: {e}")))?
        {
            return Ok(());
        }
    }
}

/// Map a key event to an action. Keybindings are fixed:
/// `q` quits, `N` starts a new session, space toggles pause, Ctrl+C
/// interrupts. Everything else is ignored.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Interrupt);
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('N') => Some(Action::NewSession),
        KeyCode::Char(' ') => Some(Action::TogglePause),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_map_key_quit() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn test_map_key_new_session_is_uppercase_only() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT)),
            Some(Action::NewSession)
        );
        assert_eq!(map_key(key(KeyCode::Char('n'))), None);
    }

    #[test]
    fn test_map_key_space_toggles_pause() {
        assert_eq!(map_key(key(KeyCode::Char(' '))), Some(Action::TogglePause));
    }

    #[test]
    fn test_map_key_ctrl_c_interrupts() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Interrupt)
        );
    }

    #[test]
    fn test_map_key_ignores_everything_else() {
        assert_eq!(map_key(key(KeyCode::Char('x'))), None);
        assert_eq!(map_key(key(KeyCode::Enter)), None);
        assert_eq!(map_key(key(KeyCode::Esc)), None);
        assert_eq!(map_key(key(KeyCode::Up)), None);
    }
}
