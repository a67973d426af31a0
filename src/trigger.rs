//! Trigger policy
//!
//! Every key event passes through [`classify`] exactly once; the host acts on
//! the resulting [`InputClass`] instead of probing modifiers in each handler.
//! [`Debouncer`] implements the idle trigger: editing keystrokes re-arm a
//! deadline, and the event-loop tick polls it for expiry.

use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key event means to the suggestion core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputClass {
    /// Ctrl+Space: request a completion immediately
    ExplicitTrigger,
    /// Tab: accept the shown suggestion
    Accept,
    /// Esc: dismiss the suggestion (or quit when nothing is active)
    Dismiss,
    /// F5: execute the current query and capture it into history
    Execute,
    /// BackTab: switch focus between panes
    FocusSwitch,
    /// Ctrl+C / Ctrl+Q: quit
    Quit,
    /// A keystroke that edits text (re-arms the idle debounce)
    Edit,
    /// Anything else (cursor movement etc.)
    Other,
}

/// Classify a key press. The caller is responsible for focus checks; this
/// only looks at the key itself.
pub fn classify(key: &KeyEvent) -> InputClass {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Terminals report Ctrl+Space as either Char(' ')+CONTROL or NUL
        KeyCode::Char(' ') if ctrl => InputClass::ExplicitTrigger,
        KeyCode::Null => InputClass::ExplicitTrigger,
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => InputClass::Quit,
        KeyCode::Tab => InputClass::Accept,
        KeyCode::BackTab => InputClass::FocusSwitch,
        KeyCode::Esc => InputClass::Dismiss,
        KeyCode::F(5) => InputClass::Execute,
        KeyCode::Char(_) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            InputClass::Edit
        }
        KeyCode::Backspace | KeyCode::Delete | KeyCode::Enter => InputClass::Edit,
        _ => InputClass::Other,
    }
}

/// Restart-on-keystroke idle timer.
///
/// Arming replaces any previous deadline for the surface, so only a quiet
/// period of the full delay lets it fire. Polled (not callback-driven) so all
/// state stays on the UI thread.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            deadline: None,
        }
    }

    /// Re-arm the deadline relative to now, cancelling any earlier one.
    pub fn rearm(&mut self) {
        self.rearm_from(Instant::now());
    }

    /// Re-arm relative to an explicit instant.
    pub fn rearm_from(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any armed deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Check for expiry. Fires at most once per arming.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}
