//! Completion worker thread
//!
//! Handles completion requests in a background thread to avoid blocking the
//! UI. Receives requests via channel, makes the HTTP call, and sends the
//! outcome back to the main thread tagged with the originating request id.
//!
//! The worker is the sole writer to the log for request outcomes: transport
//! failures at warn, empty suggestions at debug. Stale filtering happens on
//! the receiving side; the worker itself processes every request it is
//! handed.

use std::sync::mpsc::{Receiver, Sender};

use super::{CompletionClient, CompletionRequest, CompletionResponse};

/// Spawn the completion worker thread.
///
/// The thread runs until the request channel is closed.
pub fn spawn_worker(
    client: CompletionClient,
    request_rx: Receiver<CompletionRequest>,
    response_tx: Sender<CompletionResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(&client, &request_rx, &response_tx);
    });
}

fn worker_loop(
    client: &CompletionClient,
    request_rx: &Receiver<CompletionRequest>,
    response_tx: &Sender<CompletionResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let CompletionRequest::Complete {
            context,
            request_id,
        } = request;

        let message = match client.complete(&context) {
            Ok(Some(text)) => CompletionResponse::Suggestion { text, request_id },
            Ok(None) => {
                log::debug!("no suggestion for request {}", request_id);
                CompletionResponse::Empty { request_id }
            }
            Err(e) => {
                log::warn!("completion request {} failed: {}", request_id, e);
                CompletionResponse::Failed { request_id }
            }
        };

        if response_tx.send(message).is_err() {
            // Main thread disconnected
            return;
        }
    }

    log::debug!("completion worker shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::QueryContext;
    use std::sync::mpsc;

    fn request(id: u64) -> CompletionRequest {
        CompletionRequest::Complete {
            context: QueryContext {
                recent_queries: vec![],
                current_query: "SELECT".to_string(),
            },
            request_id: id,
        }
    }

    #[test]
    fn test_unreachable_endpoint_reports_failed_with_id() {
        // Nothing listens on this port, so the request fails fast
        let client = CompletionClient::new("http://127.0.0.1:1/complete");
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(client, request_rx, response_tx);

        request_tx.send(request(7)).unwrap();
        let response = response_rx.recv().unwrap();
        assert_eq!(response, CompletionResponse::Failed { request_id: 7 });
    }

    #[test]
    fn test_worker_processes_requests_in_order() {
        let client = CompletionClient::new("http://127.0.0.1:1/complete");
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(client, request_rx, response_tx);

        request_tx.send(request(1)).unwrap();
        request_tx.send(request(2)).unwrap();

        assert_eq!(response_rx.recv().unwrap().request_id(), 1);
        assert_eq!(response_rx.recv().unwrap().request_id(), 2);
    }

    #[test]
    fn test_worker_exits_when_requests_close() {
        let client = CompletionClient::new("http://127.0.0.1:1/complete");
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel::<CompletionResponse>();
        spawn_worker(client, request_rx, response_tx);

        drop(request_tx);
        // Worker drops its response sender on exit
        assert!(response_rx.recv().is_err());
    }
}
