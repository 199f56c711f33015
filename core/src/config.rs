use serde::{Deserialize, Serialize};

/// Tunables for ranking and request history. Every field falls back to its
/// default when missing from a deserialized config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound on hits returned by a single query.
    pub max_result_document_count: usize,
    /// Relevance scores closer than this are ranked by rating instead.
    pub relevance_epsilon: f64,
    /// Number of recent query outcomes kept by a `RequestQueue` (one day of minutes).
    pub request_window: usize,
}

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
pub const RELEVANCE_EPSILON: f64 = 1e-6;
pub const REQUEST_WINDOW: usize = 1440;

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_result_document_count: MAX_RESULT_DOCUMENT_COUNT,
            relevance_epsilon: RELEVANCE_EPSILON,
            request_window: REQUEST_WINDOW,
        }
    }
}
