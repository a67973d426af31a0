//! TUI host
//!
//! Owns the event loop state: the query editor, the session pane of executed
//! queries, pane focus, and the suggestion session. Everything process-wide
//! lives on [`App`]; construction wires the completion worker, teardown is
//! normal drop.

mod events;
mod render;
mod state;

// Re-export public types
pub use state::{App, Focus};
