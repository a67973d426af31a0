//! HTTP client for the completion service

use serde::Deserialize;
use thiserror::Error;

use super::QueryContext;

/// Errors from a single completion request
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Network or connection error before a status line was received
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("Completion service returned status {code}")]
    Api { code: u16 },

    /// The response body was not the expected JSON shape
    #[error("Malformed completion response: {0}")]
    Parse(String),
}

/// Response body of the completion endpoint. The `suggestion` field is
/// optional; absence means "no suggestion".
#[derive(Debug, Deserialize)]
struct CompletionBody {
    #[serde(default)]
    suggestion: Option<String>,
}

/// Client for a fixed completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    endpoint: String,
}

impl CompletionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Issue one completion request.
    ///
    /// `Ok(Some(text))` is a usable suggestion, `Ok(None)` a well-formed
    /// "no suggestion" answer (absent, null, or blank field). Transport
    /// errors and non-success statuses are `Err`; the caller decides how to
    /// log them. This method blocks and must not run on the UI thread.
    pub fn complete(&self, context: &QueryContext) -> Result<Option<String>, CompletionError> {
        let body = serde_json::to_string(context)
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        let response = ureq::post(&self.endpoint)
            .set("content-type", "application/json")
            .send_string(&body)
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => CompletionError::Api { code },
                ureq::Error::Transport(transport) => {
                    CompletionError::Network(transport.to_string())
                }
            })?;

        let parsed: CompletionBody = response
            .into_json()
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        Ok(parsed
            .suggestion
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one canned HTTP response, returning the request bytes
    /// that were received.
    fn serve_once(status: &str, body: &str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/complete", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).unwrap();
                received.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&received);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text
                        .lines()
                        .find_map(|l| l.to_ascii_lowercase().strip_prefix("content-length:").map(str::trim).map(str::to_string))
                        .and_then(|v| v.parse::<usize>().ok())
                        .unwrap_or(0);
                    if received.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&received).to_string()
        });

        (endpoint, handle)
    }

    fn context() -> QueryContext {
        QueryContext {
            recent_queries: vec!["SELECT 1".to_string()],
            current_query: "SELECT * FROM us".to_string(),
        }
    }

    #[test]
    fn test_successful_suggestion() {
        let (endpoint, server) =
            serve_once("200 OK", r#"{"suggestion": "users WHERE active = true"}"#);
        let client = CompletionClient::new(endpoint);

        let result = client.complete(&context()).unwrap();
        assert_eq!(result, Some("users WHERE active = true".to_string()));

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /complete"));
        assert!(request.contains(r#""recent_queries":["SELECT 1"]"#));
        assert!(request.contains(r#""current_query":"SELECT * FROM us""#));
    }

    #[test]
    fn test_empty_suggestion_is_none() {
        let (endpoint, server) = serve_once("200 OK", r#"{"suggestion": ""}"#);
        let client = CompletionClient::new(endpoint);
        assert_eq!(client.complete(&context()).unwrap(), None);
        server.join().unwrap();
    }

    #[test]
    fn test_absent_suggestion_field_is_none() {
        let (endpoint, server) = serve_once("200 OK", "{}");
        let client = CompletionClient::new(endpoint);
        assert_eq!(client.complete(&context()).unwrap(), None);
        server.join().unwrap();
    }

    #[test]
    fn test_whitespace_suggestion_is_none() {
        let (endpoint, server) = serve_once("200 OK", r#"{"suggestion": "   "}"#);
        let client = CompletionClient::new(endpoint);
        assert_eq!(client.complete(&context()).unwrap(), None);
        server.join().unwrap();
    }

    #[test]
    fn test_suggestion_is_trimmed() {
        let (endpoint, server) = serve_once("200 OK", r#"{"suggestion": " users \n"}"#);
        let client = CompletionClient::new(endpoint);
        assert_eq!(client.complete(&context()).unwrap(), Some("users".to_string()));
        server.join().unwrap();
    }

    #[test]
    fn test_server_error_status() {
        let (endpoint, server) =
            serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#);
        let client = CompletionClient::new(endpoint);

        match client.complete(&context()) {
            Err(CompletionError::Api { code }) => assert_eq!(code, 500),
            other => panic!("expected Api error, got {other:?}"),
        }
        server.join().unwrap();
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        let (endpoint, server) = serve_once("200 OK", "not json");
        let client = CompletionClient::new(endpoint);
        assert!(matches!(
            client.complete(&context()),
            Err(CompletionError::Parse(_))
        ));
        server.join().unwrap();
    }

    #[test]
    fn test_connection_refused_is_network_error() {
        // Bind then drop to get a port nothing listens on
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = CompletionClient::new(format!("http://127.0.0.1:{port}/complete"));
        assert!(matches!(
            client.complete(&context()),
            Err(CompletionError::Network(_))
        ));
    }
}
