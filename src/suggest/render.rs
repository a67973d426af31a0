//! Suggestion bar rendering
//!
//! A single line between the session pane and the editor showing the
//! lifecycle state. Errors never surface here beyond the bar quietly
//! returning to its idle hint.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthChar;

use super::state::{Phase, SuggestState};

const IDLE_HINT: &str = " Ctrl+Space: complete · F5: run query";
const PENDING_HINT: &str = " completing…";

/// Render the suggestion bar for the current lifecycle phase.
pub fn suggestion_bar(frame: &mut Frame, area: Rect, state: &SuggestState) {
    let max = area.width as usize;
    let line = match state.phase() {
        Phase::Idle => Line::from(Span::styled(
            fit_width(IDLE_HINT, max),
            Style::default().fg(Color::DarkGray),
        )),
        Phase::Pending { .. } => Line::from(Span::styled(
            fit_width(PENDING_HINT, max),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
        Phase::Shown { suggestion } => Line::from(vec![
            Span::styled(" → ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                fit_width(&suggestion.text, max.saturating_sub(25)),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC),
            ),
            Span::styled(
                "  Tab: accept · Esc: hide",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Truncate a string to at most `max` display columns (CJK and other
/// double-width characters count as two).
fn fit_width(text: &str, max: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width_ascii() {
        assert_eq!(fit_width("SELECT * FROM users", 6), "SELECT");
        assert_eq!(fit_width("abc", 10), "abc");
        assert_eq!(fit_width("abc", 0), "");
    }

    #[test]
    fn test_fit_width_double_width() {
        // Each of these characters occupies two columns
        assert_eq!(fit_width("テーブル", 4), "テー");
        assert_eq!(fit_width("テーブル", 5), "テー");
    }
}
