//! Completion service client
//!
//! One HTTP POST per trigger to the configured endpoint, carrying the recent
//! query history and the current line. The call runs on a worker thread so
//! the UI thread never blocks; requests and responses cross over mpsc
//! channels tagged with a monotonically increasing request id. There is no
//! transport-level cancellation: a superseded request runs to completion and
//! its response is discarded by the id check on arrival.

use serde::Serialize;

mod client;
pub mod worker;

pub use client::{CompletionClient, CompletionError};

/// Request payload sent to the completion service.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryContext {
    pub recent_queries: Vec<String>,
    pub current_query: String,
}

/// Request messages sent to the completion worker thread
#[derive(Debug)]
pub enum CompletionRequest {
    /// Ask the service to complete the given context
    Complete {
        context: QueryContext,
        /// Unique id for this request, echoed in the response and used to
        /// filter stale responses
        request_id: u64,
    },
}

/// Response messages received from the completion worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResponse {
    /// The service produced a non-empty suggestion
    Suggestion { text: String, request_id: u64 },
    /// Well-formed response without a usable suggestion
    Empty { request_id: u64 },
    /// Transport failure or non-success status (already logged by the worker)
    Failed { request_id: u64 },
}

impl CompletionResponse {
    /// The id of the request this response answers.
    pub fn request_id(&self) -> u64 {
        match self {
            CompletionResponse::Suggestion { request_id, .. }
            | CompletionResponse::Empty { request_id }
            | CompletionResponse::Failed { request_id } => *request_id,
        }
    }
}
