//! Query context extraction
//!
//! Derives the single logical "current line" sent to the completion service:
//! the last line of the surface's text, whitespace-trimmed. An empty result
//! means "do not request"; callers additionally apply the configured minimum
//! length before firing an idle trigger.

use crate::surface::EditableSurface;

/// Extract the current line from an editable surface.
///
/// Idempotent: repeated calls on an unchanged surface yield the same string.
pub fn current_line<S: EditableSurface + ?Sized>(surface: &S) -> String {
    let text = surface.text();
    text.lines().last().unwrap_or("").trim().to_string()
}
