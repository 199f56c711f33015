//! In-memory full-text search over short documents: stop words, plus/minus
//! query terms, status and predicate filters, TF-IDF ranking with a rating
//! tie-break. Also carries the request history window and result pagination.

pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod paginator;
pub mod query;
pub mod ranking;
pub mod request_queue;
pub mod stop_words;
pub mod tokenizer;

pub use config::SearchConfig;
pub use document::{Document, DocumentStatus};
pub use error::{Result, SearchError};
pub use index::SearchIndex;
pub use paginator::{paginate, Page, Paginator};
pub use query::{Query, QueryParser};
pub use ranking::DocumentPredicate;
pub use request_queue::RequestQueue;
pub use stop_words::StopWords;
pub use tokenizer::{NormalizingTokenizer, Tokenizer, WhitespaceTokenizer};

/// Caller-assigned document identifier. Negative values are rejected on ingestion.
pub type DocId = i32;
