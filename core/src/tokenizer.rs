use unicode_normalization::UnicodeNormalization;

/// Splits raw text into terms. Injected into the index so that indexing and
/// query parsing always agree on what a term is.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Maps one whole word to its term form without splitting it.
    fn normalize(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Splits on the ASCII space only. Tabs, newlines and other control
/// characters stay inside tokens so that validation can reject them.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        split_into_words(text).map(str::to_string).collect()
    }
}

/// Space splitting followed by NFKC normalization and lowercasing of each token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizingTokenizer;

impl Tokenizer for NormalizingTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        split_into_words(text).map(|word| self.normalize(word)).collect()
    }

    fn normalize(&self, word: &str) -> String {
        word.nfkc().collect::<String>().to_lowercase()
    }
}

pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

/// A word is valid when it holds no control characters (U+0000..U+001F).
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| c < ' ')
}
