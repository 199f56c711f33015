use std::collections::BTreeSet;

use crate::error::{Result, SearchError};
use crate::stop_words::StopWords;
use crate::tokenizer::{is_valid_word, Tokenizer};

const MINUS: char = '-';

/// Parsed query: terms that must appear and terms that must not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

struct QueryWord {
    data: String,
    is_minus: bool,
    is_stop: bool,
}

pub struct QueryParser<'a> {
    stop_words: &'a StopWords,
    tokenizer: &'a dyn Tokenizer,
}

impl<'a> QueryParser<'a> {
    pub fn new(stop_words: &'a StopWords, tokenizer: &'a dyn Tokenizer) -> Self {
        Self { stop_words, tokenizer }
    }

    pub fn parse(&self, text: &str) -> Result<Query> {
        let mut query = Query::default();
        for token in self.tokenizer.tokenize(text) {
            let word = self.parse_word(token)?;
            if word.is_stop {
                continue;
            }
            if word.is_minus {
                query.minus_words.insert(word.data);
            } else {
                query.plus_words.insert(word.data);
            }
        }
        Ok(query)
    }

    // Only a single leading marker is legal: "--cat" is rejected, not read as "-cat".
    fn parse_word(&self, token: String) -> Result<QueryWord> {
        let (data, is_minus) = match token.strip_prefix(MINUS) {
            Some(rest) => (rest.to_string(), true),
            None => (token, false),
        };
        if data.is_empty() {
            return Err(SearchError::invalid_argument("query has a minus marker with no word"));
        }
        if data.starts_with(MINUS) {
            return Err(SearchError::invalid_argument(format!("query word {data:?} has a double minus marker")));
        }
        if !is_valid_word(&data) {
            return Err(SearchError::invalid_argument(format!("query word {data:?} contains control characters")));
        }
        let is_stop = self.stop_words.contains(&data);
        Ok(QueryWord { data, is_minus, is_stop })
    }
}
