//! Suggestion lifecycle state machine

use std::sync::mpsc::{Receiver, Sender};

use crate::completion::{CompletionRequest, CompletionResponse, QueryContext};

/// A single candidate completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
}

/// Lifecycle phase of the suggestion session. Exactly one of these exists;
/// a new trigger supersedes whatever came before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// No suggestion activity
    Idle,
    /// A request is in flight; only a response carrying this id may
    /// transition the state
    Pending { request_id: u64 },
    /// A suggestion is visible, waiting to be accepted or dismissed
    Shown { suggestion: Suggestion },
}

/// Suggestion session state
///
/// Mutated only from the UI thread. Responses from the worker are drained by
/// [`SuggestState::poll_responses`] each tick; anything answering a
/// superseded request is discarded before it can touch state.
pub struct SuggestState {
    phase: Phase,
    /// Last issued request id, incremented per trigger
    request_id: u64,
    request_tx: Option<Sender<CompletionRequest>>,
    response_rx: Option<Receiver<CompletionResponse>>,
}

impl SuggestState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            request_id: 0,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Attach the channels connecting this session to the worker thread.
    pub fn set_channels(
        &mut self,
        request_tx: Sender<CompletionRequest>,
        response_rx: Receiver<CompletionResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Text of the currently shown suggestion, if any.
    pub fn shown(&self) -> Option<&str> {
        match &self.phase {
            Phase::Shown { suggestion } => Some(&suggestion.text),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Start a new request for the given context, superseding any Pending or
    /// Shown state. Returns false if no channel is attached or the worker is
    /// gone; the phase is reset to Idle in that case.
    pub fn begin_request(&mut self, context: QueryContext) -> bool {
        let tx = match &self.request_tx {
            Some(tx) => tx,
            None => return false,
        };

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        if tx
            .send(CompletionRequest::Complete {
                context,
                request_id,
            })
            .is_ok()
        {
            self.phase = Phase::Pending { request_id };
            true
        } else {
            self.phase = Phase::Idle;
            false
        }
    }

    /// Drain and apply any responses the worker has delivered.
    pub fn poll_responses(&mut self) {
        let mut responses = Vec::new();
        if let Some(rx) = &self.response_rx {
            while let Ok(response) = rx.try_recv() {
                responses.push(response);
            }
        }
        for response in responses {
            self.handle_response(response);
        }
    }

    /// Apply a single worker response.
    ///
    /// Responses are ignored unless a request is Pending and the ids match;
    /// stale responses are dropped silently (the worker already logged the
    /// outcome).
    pub fn handle_response(&mut self, response: CompletionResponse) {
        let pending_id = match self.phase {
            Phase::Pending { request_id } => request_id,
            _ => return,
        };
        if response.request_id() != pending_id {
            return;
        }

        self.phase = match response {
            CompletionResponse::Suggestion { text, .. } => Phase::Shown {
                suggestion: Suggestion { text },
            },
            CompletionResponse::Empty { .. } | CompletionResponse::Failed { .. } => Phase::Idle,
        };
    }

    /// Accept the shown suggestion, returning its text for insertion.
    /// No-op unless a suggestion is shown.
    pub fn accept(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Shown { suggestion } => Some(suggestion.text),
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Dismiss whatever is active (Esc, focus change, mouse click). An
    /// in-flight request keeps running; its response will fail the phase
    /// check on arrival.
    pub fn dismiss(&mut self) {
        self.phase = Phase::Idle;
    }

    /// The user resumed normal typing: hide a shown suggestion without
    /// inserting. A Pending request is left alone.
    pub fn dismiss_if_shown(&mut self) {
        if matches!(self.phase, Phase::Shown { .. }) {
            self.phase = Phase::Idle;
        }
    }
}

impl Default for SuggestState {
    fn default() -> Self {
        Self::new()
    }
}
