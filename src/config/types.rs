// Configuration type definitions

use serde::Deserialize;

/// Completion behavior section
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    /// Completion service endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Quiet period before an idle trigger fires, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Idle triggers fire only when the current line is longer than this
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Cap on the recent-query history sent with each request
    #[serde(default = "default_max_recent_queries")]
    pub max_recent_queries: usize,

    /// Whether idle typing triggers completions (Ctrl+Space always works)
    #[serde(default = "default_idle_trigger")]
    pub idle_trigger: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        CompletionConfig {
            endpoint: default_endpoint(),
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            max_recent_queries: default_max_recent_queries(),
            idle_trigger: default_idle_trigger(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub completion: CompletionConfig,
}

fn default_endpoint() -> String {
    "http://localhost:8000/complete".to_string()
}

fn default_debounce_ms() -> u64 {
    800
}

fn default_min_query_len() -> usize {
    5
}

fn default_max_recent_queries() -> usize {
    20
}

fn default_idle_trigger() -> bool {
    true
}
