//! Shared test fixtures

use crate::surface::EditableSurface;

/// In-memory editable surface for tests that don't need a real widget.
#[derive(Debug, Clone)]
pub struct FixtureSurface {
    lines: Vec<String>,
    cursor: (usize, usize),
}

impl FixtureSurface {
    pub fn with_text(text: &str) -> Self {
        let lines: Vec<String> = if text.is_empty() {
            vec![String::new()]
        } else {
            text.split('\n').map(str::to_string).collect()
        };
        let row = lines.len() - 1;
        let col = lines[row].chars().count();
        Self {
            lines,
            cursor: (row, col),
        }
    }
}

impl EditableSurface for FixtureSurface {
    fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    fn insert_at_cursor(&mut self, text: &str) {
        let (row, col) = self.cursor;
        let line = &self.lines[row];
        let byte: usize = line
            .char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        let mut updated = line.clone();
        updated.insert_str(byte, text);
        self.lines[row] = updated;
        self.cursor = (row, col + text.chars().count());
    }

    fn delete_chars_before_cursor(&mut self, count: usize) {
        let (row, col) = self.cursor;
        let keep = col.saturating_sub(count);
        let line = &self.lines[row];
        let prefix: String = line.chars().take(keep).collect();
        let suffix: String = line.chars().skip(col).collect();
        self.lines[row] = format!("{prefix}{suffix}");
        self.cursor = (row, keep);
    }
}
