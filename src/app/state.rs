use std::sync::mpsc;
use std::time::Instant;

use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::completion::{CompletionClient, QueryContext, worker};
use crate::config::Config;
use crate::context;
use crate::history::RecentQueries;
use crate::suggest::SuggestState;
use crate::surface;
use crate::trigger::Debouncer;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    Session,
}

/// Application state
///
/// The single session object: all process-wide state (recent queries, the
/// suggestion lifecycle, the debounce deadline) hangs off it.
pub struct App {
    pub textarea: TextArea<'static>,
    pub focus: Focus,
    pub recent: RecentQueries,
    pub suggest: SuggestState,
    pub debouncer: Debouncer,
    /// Queries executed this session, oldest first (session pane content)
    pub executed: Vec<String>,
    pub session_scroll: u16,
    pub min_query_len: usize,
    pub idle_trigger: bool,
    pub should_quit: bool,
}

impl App {
    /// Create the session and spawn the completion worker.
    pub fn new(config: &Config) -> Self {
        let mut suggest = SuggestState::new();
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        worker::spawn_worker(
            CompletionClient::new(config.completion.endpoint.clone()),
            request_rx,
            response_tx,
        );
        suggest.set_channels(request_tx, response_rx);

        Self {
            textarea: Self::editor_textarea(),
            focus: Focus::Editor,
            recent: RecentQueries::new(config.completion.max_recent_queries),
            suggest,
            debouncer: Debouncer::new(config.completion.debounce_ms),
            executed: Vec::new(),
            session_scroll: 0,
            min_query_len: config.completion.min_query_len,
            idle_trigger: config.completion.idle_trigger,
            should_quit: false,
        }
    }

    fn editor_textarea() -> TextArea<'static> {
        let mut textarea = TextArea::default();
        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("SELECT ...");
        textarea
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the current editor contents
    pub fn query(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Fire a completion trigger for the current line. An empty line
    /// suppresses the trigger entirely.
    pub fn fire_trigger(&mut self) {
        let current_query = context::current_line(&self.textarea);
        if current_query.is_empty() {
            return;
        }
        self.suggest.begin_request(QueryContext {
            recent_queries: self.recent.snapshot(),
            current_query,
        });
    }

    /// Poll the debounce deadline; fire an idle trigger when the quiet
    /// period elapsed and the current line exceeds the length threshold.
    pub fn check_idle_trigger(&mut self, now: Instant) {
        if !self.debouncer.fire(now) {
            return;
        }
        if self.focus != Focus::Editor {
            return;
        }
        let line = context::current_line(&self.textarea);
        if line.chars().count() > self.min_query_len {
            self.fire_trigger();
        }
    }

    /// Drain completion worker responses into the lifecycle.
    pub fn poll_responses(&mut self) {
        self.suggest.poll_responses();
    }

    /// Accept the shown suggestion and insert it at the cursor. Dropped when
    /// the editor pane does not hold focus (the suggestion stays shown).
    pub fn accept_suggestion(&mut self) {
        if self.focus != Focus::Editor {
            return;
        }
        if let Some(text) = self.suggest.accept() {
            surface::insert_completion(&mut self.textarea, &text);
        }
    }

    /// Execute the current query: capture it into the recent-query history,
    /// echo it to the session pane, and reset the editor.
    pub fn execute_query(&mut self) {
        let query = self.query();
        let trimmed = query.trim();
        if !trimmed.is_empty() {
            self.recent.record(trimmed);
            self.executed.push(trimmed.to_string());
        }
        self.textarea = Self::editor_textarea();
        self.suggest.dismiss();
        self.debouncer.cancel();
        self.session_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_initialization() {
        let app = App::new(&Config::default());
        assert_eq!(app.focus, Focus::Editor);
        assert!(!app.should_quit());
        assert_eq!(app.query(), "");
        assert!(app.recent.is_empty());
        assert!(app.executed.is_empty());
    }

    #[test]
    fn test_execute_query_captures_and_resets() {
        let mut app = App::new(&Config::default());
        app.textarea.insert_str("SELECT * FROM users;");

        app.execute_query();

        assert_eq!(app.query(), "");
        assert_eq!(app.recent.snapshot(), vec!["SELECT * FROM users;"]);
        assert_eq!(app.executed, vec!["SELECT * FROM users;"]);
    }

    #[test]
    fn test_execute_blank_query_is_ignored() {
        let mut app = App::new(&Config::default());
        app.textarea.insert_str("   ");

        app.execute_query();

        assert!(app.recent.is_empty());
        assert!(app.executed.is_empty());
    }

    #[test]
    fn test_fire_trigger_on_empty_line_is_suppressed() {
        let mut app = App::new(&Config::default());
        app.fire_trigger();
        assert!(!app.suggest.is_pending());
    }
}
