use std::collections::VecDeque;

use tracing::trace;

use crate::document::{Document, DocumentStatus};
use crate::error::Result;
use crate::index::SearchIndex;
use crate::ranking::DocumentPredicate;

#[derive(Debug, Clone)]
struct QueryOutcome {
    query: String,
    hits: usize,
}

/// Runs queries against one index and remembers the outcome of the most
/// recent `request_window` of them, oldest evicted first.
pub struct RequestQueue<'a> {
    index: &'a SearchIndex,
    requests: VecDeque<QueryOutcome>,
    no_result_requests: usize,
    capacity: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(index: &'a SearchIndex) -> Self {
        Self::with_capacity(index, index.config().request_window)
    }

    pub fn with_capacity(index: &'a SearchIndex, capacity: usize) -> Self {
        Self { index, requests: VecDeque::new(), no_result_requests: 0, capacity }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.add_find_request_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn add_find_request_by_status(&mut self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, &|_, document_status, _| document_status == status)
    }

    /// A malformed query returns its error and is not recorded.
    pub fn add_find_request_with(&mut self, raw_query: &str, predicate: &DocumentPredicate<'_>) -> Result<Vec<Document>> {
        let result = self.index.find_top_documents_with(raw_query, predicate)?;
        self.record(raw_query, result.len());
        Ok(result)
    }

    /// Empty-result queries among the retained window.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    fn record(&mut self, raw_query: &str, hits: usize) {
        if hits == 0 {
            self.no_result_requests += 1;
        }
        self.requests.push_back(QueryOutcome { query: raw_query.to_string(), hits });
        while self.requests.len() > self.capacity {
            let Some(evicted) = self.requests.pop_front() else {
                break;
            };
            if evicted.hits == 0 {
                self.no_result_requests -= 1;
            }
            trace!(query = %evicted.query, hits = evicted.hits, "evicted request outcome");
        }
    }
}
