//! Editable surface adapter and suggestion insertion
//!
//! The suggestion core never touches a concrete widget directly; it goes
//! through [`EditableSurface`], implemented once per supported editor. The
//! only implementation shipped here is for `tui_textarea::TextArea`, which
//! backs the query editor pane.
//!
//! Insertion is cursor-relative: surrounding content is preserved. When the
//! completion service repeats the partial word under the cursor (e.g. typing
//! `us` and receiving `users WHERE ...`), the partial token is replaced so
//! the word is not doubled.

use tui_textarea::TextArea;

/// Capability surface of an editor the suggestion core can work against.
///
/// Focus is not part of this trait: the host decides which pane holds focus
/// and gates insertion on it before calling [`insert_completion`].
pub trait EditableSurface {
    /// Full text content of the surface. Empty string if nothing is readable.
    fn text(&self) -> String;

    /// Cursor position as (row, column), both zero-based character indices.
    fn cursor(&self) -> (usize, usize);

    /// Insert text at the cursor, leaving the cursor after the inserted text.
    fn insert_at_cursor(&mut self, text: &str);

    /// Delete `count` characters immediately before the cursor.
    fn delete_chars_before_cursor(&mut self, count: usize);
}

impl EditableSurface for TextArea<'_> {
    fn text(&self) -> String {
        self.lines().join("\n")
    }

    fn cursor(&self) -> (usize, usize) {
        TextArea::cursor(self)
    }

    fn insert_at_cursor(&mut self, text: &str) {
        self.insert_str(text);
    }

    fn delete_chars_before_cursor(&mut self, count: usize) {
        for _ in 0..count {
            self.delete_char();
        }
    }
}

/// Insert an accepted suggestion at the cursor.
///
/// If the identifier token directly before the cursor is a case-insensitive
/// prefix of the suggestion, the token is replaced; otherwise the suggestion
/// is inserted as-is. Content after the cursor is always preserved.
pub fn insert_completion<S: EditableSurface + ?Sized>(surface: &mut S, suggestion: &str) {
    let (row, col) = surface.cursor();
    let text = surface.text();
    let line = text.lines().nth(row).unwrap_or("");
    let before: String = line.chars().take(col).collect();

    let start = token_start(&before);
    let token: String = before.chars().skip(start).collect();

    if !token.is_empty() && has_prefix_ignore_case(suggestion, &token) {
        surface.delete_chars_before_cursor(token.chars().count());
    }
    surface.insert_at_cursor(suggestion);
}

/// Find the character index where the identifier token ending at the end of
/// `text` begins. Returns `text`'s char length when it ends on a delimiter.
fn token_start(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut i = chars.len();
    while i > 0 && is_ident_char(chars[i - 1]) {
        i -= 1;
    }
    i
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

fn has_prefix_ignore_case(text: &str, prefix: &str) -> bool {
    let mut chars = text.chars();
    for expected in prefix.chars() {
        match chars.next() {
            Some(actual) if actual.eq_ignore_ascii_case(&expected) => {}
            _ => return false,
        }
    }
    true
}
