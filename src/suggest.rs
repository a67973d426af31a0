//! Suggestion lifecycle
//!
//! Owns the single active suggestion session: `Idle` until a trigger fires,
//! `Pending` while a request is in flight, `Shown` once a non-empty
//! suggestion arrives. All visible-suggestion state lives here, and only the
//! accept path leads to text insertion.

mod render;
mod state;

pub use render::suggestion_bar;
pub use state::{Phase, SuggestState, Suggestion};
