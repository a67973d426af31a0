//! sqlhint - interactive SQL console with inline AI completions
//!
//! The core of this crate is the suggestion interaction machinery: a trigger
//! policy (explicit key or debounced idle typing), a completion client that
//! posts query context to an external service, and a lifecycle state machine
//! that owns the single active suggestion from request to accept/dismiss.
//! The TUI host in [`app`] wires that core to a `tui-textarea` editor.

pub mod app;
pub mod completion;
pub mod config;
pub mod context;
pub mod error;
pub mod history;
pub mod suggest;
pub mod surface;
pub mod trigger;

#[cfg(test)]
pub mod test_utils;
