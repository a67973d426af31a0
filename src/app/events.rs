use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};

use super::state::{App, Focus};
use crate::suggest::Phase;
use crate::trigger::{self, InputClass};

impl App {
    /// Handle a key press event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match trigger::classify(&key) {
            InputClass::Quit => self.should_quit = true,

            InputClass::FocusSwitch => {
                // Leaving the editor dismisses whatever is active
                self.suggest.dismiss();
                self.debouncer.cancel();
                self.focus = match self.focus {
                    Focus::Editor => Focus::Session,
                    Focus::Session => Focus::Editor,
                };
            }

            InputClass::ExplicitTrigger => {
                if self.focus == Focus::Editor {
                    self.debouncer.cancel();
                    self.fire_trigger();
                }
            }

            InputClass::Accept => {
                // Tab without a shown suggestion does nothing
                if self.suggest.shown().is_some() {
                    self.accept_suggestion();
                }
            }

            InputClass::Dismiss => {
                // Esc clears suggestion activity first; a second Esc quits
                if matches!(self.suggest.phase(), Phase::Idle) {
                    self.should_quit = true;
                } else {
                    self.suggest.dismiss();
                    self.debouncer.cancel();
                }
            }

            InputClass::Execute => self.execute_query(),

            InputClass::Edit => match self.focus {
                Focus::Editor => {
                    // Resuming normal typing hides a shown suggestion
                    self.suggest.dismiss_if_shown();
                    self.textarea.input(key);
                    if self.idle_trigger {
                        self.debouncer.rearm();
                    }
                }
                Focus::Session => self.handle_session_key(key),
            },

            InputClass::Other => match self.focus {
                Focus::Editor => {
                    // Moving the cursor away invalidates a shown suggestion
                    self.suggest.dismiss_if_shown();
                    self.textarea.input(key);
                }
                Focus::Session => self.handle_session_key(key),
            },
        }
    }

    /// Scroll keys for the session pane
    fn handle_session_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.session_scroll = self.session_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.session_scroll = self.session_scroll.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => self.session_scroll = 0,
            _ => {}
        }
    }

    /// Handle a mouse event: any button press dismisses a shown suggestion.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            self.suggest.dismiss_if_shown();
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
