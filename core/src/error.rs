use thiserror::Error;

/// Errors returned by the search core. Every failing call leaves the index unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Caller supplied an argument that can never be valid: a bad document id,
    /// a word with control characters, a malformed query term, a zero page size.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A position or document id lookup fell outside what the index holds.
    #[error("out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SearchError::InvalidArgument(msg.into())
    }

    pub fn out_of_range<S: Into<String>>(msg: S) -> Self {
        SearchError::OutOfRange(msg.into())
    }
}
