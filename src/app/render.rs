use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use crate::suggest;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Session pane on top, one-line suggestion bar, editor at the bottom
        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(5),
        ])
        .split(frame.area());

        self.render_session_pane(frame, layout[0]);
        suggest::suggestion_bar(frame, layout[1], &self.suggest);
        self.render_editor(frame, layout[2]);
    }

    /// Render the scrollback of executed queries (top)
    fn render_session_pane(&self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::Session {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Session ")
            .border_style(Style::default().fg(border_color));

        let (text, style) = if self.executed.is_empty() {
            (
                "No queries executed yet. F5 runs the editor contents.".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            let listing = self
                .executed
                .iter()
                .enumerate()
                .map(|(i, query)| format!("{:>3}> {}", i + 1, query))
                .collect::<Vec<_>>()
                .join("\n");
            (listing, Style::default())
        };

        let content = Paragraph::new(text)
            .block(block)
            .style(style)
            .scroll((self.session_scroll, 0));
        frame.render_widget(content, area);
    }

    /// Render the query editor (bottom)
    fn render_editor(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::Editor {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Query ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.textarea, area);
    }
}
