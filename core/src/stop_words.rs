use lazy_static::lazy_static;
use std::collections::BTreeSet;

use crate::error::{Result, SearchError};
use crate::tokenizer::{is_valid_word, split_into_words, Tokenizer};

lazy_static! {
    static ref ENGLISH: Vec<&'static str> = vec![
        "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
        "be","because","been","before","being","below","between","both","but","by",
        "can","cannot","could","did","do","does","doing","down","during",
        "each","few","for","from","further",
        "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
        "i","if","in","into","is","it","its","itself",
        "me","more","most","my","myself",
        "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
        "same","she","should","so","some","such",
        "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
        "under","until","up","very",
        "was","we","were","what","when","where","which","while","who","whom","why","with","would",
        "you","your","yours","yourself","yourselves",
    ];
}

/// Immutable set of words excluded from both indexing and querying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// Builds the set from a word list. Empty strings are skipped, duplicates
    /// collapse, and any word with a control character fails the whole set.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(word) {
                return Err(SearchError::invalid_argument(format!(
                    "stop word {word:?} contains control characters"
                )));
            }
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    /// Space-separated stop words, e.g. `"and in on"`.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(split_into_words(text))
    }

    pub fn english() -> Self {
        Self { words: ENGLISH.iter().map(|w| w.to_string()).collect() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Maps every entry, as one unit, to the term form `tokenizer` produces.
    /// Entries with spaces stay whole and so never match a single token.
    pub fn normalized(&self, tokenizer: &dyn Tokenizer) -> Self {
        Self { words: self.words.iter().map(|w| tokenizer.normalize(w)).collect() }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
