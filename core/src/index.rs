use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::config::SearchConfig;
use crate::document::{Document, DocumentStatus};
use crate::error::{Result, SearchError};
use crate::query::{Query, QueryParser};
use crate::ranking::{inverse_document_freq, rank, DocumentPredicate};
use crate::stop_words::StopWords;
use crate::tokenizer::{is_valid_word, Tokenizer, WhitespaceTokenizer};
use crate::DocId;

#[derive(Debug, Clone, Copy)]
struct DocumentData {
    rating: i32,
    status: DocumentStatus,
}

/// In-memory inverted index with TF-IDF ranking.
///
/// Documents are only ever added: ratings, statuses and postings are fixed at
/// ingestion time.
pub struct SearchIndex {
    config: SearchConfig,
    tokenizer: Box<dyn Tokenizer>,
    stop_words: StopWords,
    word_to_document_freqs: BTreeMap<String, BTreeMap<DocId, f64>>,
    document_to_word_freqs: BTreeMap<DocId, BTreeMap<String, f64>>,
    documents: BTreeMap<DocId, DocumentData>,
    document_ids: Vec<DocId>,
}

impl SearchIndex {
    pub fn new(stop_words: StopWords) -> Self {
        Self::with_options(stop_words, Box::new(WhitespaceTokenizer), SearchConfig::default())
    }

    /// Stop words given as space-separated text, e.g. `"and in on"`.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Ok(Self::new(StopWords::from_text(text)?))
    }

    pub fn with_options(stop_words: StopWords, tokenizer: Box<dyn Tokenizer>, config: SearchConfig) -> Self {
        let stop_words = stop_words.normalized(tokenizer.as_ref());
        Self {
            config,
            tokenizer,
            stop_words,
            word_to_document_freqs: BTreeMap::new(),
            document_to_word_freqs: BTreeMap::new(),
            documents: BTreeMap::new(),
            document_ids: Vec::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn add_document(&mut self, document_id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        if document_id < 0 {
            return Err(SearchError::invalid_argument(format!("document id {document_id} is negative")));
        }
        if self.documents.contains_key(&document_id) {
            return Err(SearchError::invalid_argument(format!("document id {document_id} already exists")));
        }
        let words = self.split_into_words_no_stop(text)?;

        let mut word_freqs: BTreeMap<String, f64> = BTreeMap::new();
        if !words.is_empty() {
            let inv_word_count = 1.0 / words.len() as f64;
            for word in words {
                *word_freqs.entry(word).or_insert(0.0) += inv_word_count;
            }
        }
        for (word, freq) in &word_freqs {
            self.word_to_document_freqs.entry(word.clone()).or_default().insert(document_id, *freq);
        }

        let rating = compute_average_rating(ratings);
        debug!(document_id, terms = word_freqs.len(), rating, %status, "indexed document");
        self.document_to_word_freqs.insert(document_id, word_freqs);
        self.documents.insert(document_id, DocumentData { rating, status });
        self.document_ids.push(document_id);
        Ok(())
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Id of the document added at insertion position `index`.
    pub fn document_id(&self, index: usize) -> Result<DocId> {
        self.document_ids.get(index).copied().ok_or_else(|| {
            SearchError::out_of_range(format!("document index {index} is outside 0..{}", self.document_ids.len()))
        })
    }

    /// Document ids in insertion order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, DocId>> {
        self.document_ids.iter().copied()
    }

    /// Term frequencies of one document; empty for unknown ids.
    pub fn word_frequencies(&self, document_id: DocId) -> &BTreeMap<String, f64> {
        static EMPTY: BTreeMap<String, f64> = BTreeMap::new();
        self.document_to_word_freqs.get(&document_id).unwrap_or(&EMPTY)
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, &|_, document_status, _| document_status == status)
    }

    pub fn find_top_documents_with(&self, raw_query: &str, predicate: &DocumentPredicate<'_>) -> Result<Vec<Document>> {
        let query = self.parse_query(raw_query)?;
        let matched = self.find_all_documents(&query, predicate);
        let top = rank(matched, self.config.relevance_epsilon, self.config.max_result_document_count);
        debug!(query = raw_query, hits = top.len(), "ranked documents");
        Ok(top)
    }

    /// Plus words of `raw_query` present in the document, or nothing if any
    /// minus word is present, together with the document's status.
    pub fn match_document(&self, raw_query: &str, document_id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        if document_id < 0 {
            return Err(SearchError::invalid_argument(format!("document id {document_id} is negative")));
        }
        let query = self.parse_query(raw_query)?;
        let data = self
            .documents
            .get(&document_id)
            .ok_or_else(|| SearchError::out_of_range(format!("document id {document_id} is not indexed")))?;

        let contains = |word: &String| {
            self.word_to_document_freqs.get(word).is_some_and(|freqs| freqs.contains_key(&document_id))
        };
        if query.minus_words.iter().any(|word| contains(word)) {
            return Ok((Vec::new(), data.status));
        }
        let matched = query.plus_words.iter().filter(|word| contains(*word)).cloned().collect();
        Ok((matched, data.status))
    }

    fn parse_query(&self, raw_query: &str) -> Result<Query> {
        QueryParser::new(&self.stop_words, self.tokenizer.as_ref()).parse(raw_query)
    }

    fn split_into_words_no_stop(&self, text: &str) -> Result<Vec<String>> {
        let mut words = Vec::new();
        for word in self.tokenizer.tokenize(text) {
            if !is_valid_word(&word) {
                return Err(SearchError::invalid_argument(format!("word {word:?} contains control characters")));
            }
            if !self.stop_words.contains(&word) {
                words.push(word);
            }
        }
        Ok(words)
    }

    fn find_all_documents(&self, query: &Query, predicate: &DocumentPredicate<'_>) -> Vec<Document> {
        let mut document_to_relevance: BTreeMap<DocId, f64> = BTreeMap::new();
        for word in &query.plus_words {
            let Some(freqs) = self.word_to_document_freqs.get(word) else {
                continue;
            };
            let idf = inverse_document_freq(self.document_count(), freqs.len());
            for (&document_id, &term_freq) in freqs {
                let data = &self.documents[&document_id];
                if predicate(document_id, data.status, data.rating) {
                    *document_to_relevance.entry(document_id).or_insert(0.0) += term_freq * idf;
                }
            }
        }

        for word in &query.minus_words {
            let Some(freqs) = self.word_to_document_freqs.get(word) else {
                continue;
            };
            for document_id in freqs.keys() {
                document_to_relevance.remove(document_id);
            }
        }

        document_to_relevance
            .into_iter()
            .map(|(document_id, relevance)| Document::new(document_id, relevance, self.documents[&document_id].rating))
            .collect()
    }
}

impl fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchIndex")
            .field("config", &self.config)
            .field("stop_words", &self.stop_words)
            .field("documents", &self.documents.len())
            .field("terms", &self.word_to_document_freqs.len())
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = DocId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, DocId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Truncating mean; 0 for no ratings.
fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}
