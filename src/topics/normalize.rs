// Text normalizer: raw survey answer -> base-form tokens.
//
// Steps: lowercase, replace non-word characters with spaces, split into
// Unicode words, drop stopwords / punctuation / tokens under three
// characters, then reduce each token with the configured lemmatizer.

use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;
use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

use super::traits::Lemmatizer;

/// Tokens must be longer than this (in characters) to be kept.
const MIN_TOKEN_CHARS: usize = 3;

pub struct Normalizer {
    non_word: Regex,
    stop_words: HashSet<String>,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl Normalizer {
    /// Build a normalizer with the Portuguese stopword list.
    pub fn new(lemmatizer: Box<dyn Lemmatizer>) -> Result<Self> {
        let stop_words: Vec<String> = get(LANGUAGE::Portuguese);
        Self::with_stop_words(lemmatizer, stop_words)
    }

    pub fn with_stop_words(
        lemmatizer: Box<dyn Lemmatizer>,
        stop_words: impl IntoIterator<Item = String>,
    ) -> Result<Self> {
        // `\w` is Unicode-aware here, so accented letters survive.
        let non_word = Regex::new(r"[^\w\s]").context("Failed to compile non-word pattern")?;
        Ok(Self {
            non_word,
            stop_words: stop_words.into_iter().map(|w| w.to_lowercase()).collect(),
            lemmatizer,
        })
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Normalize one answer. Absent or blank text yields no tokens.
    pub fn tokens(&self, text: Option<&str>) -> Vec<String> {
        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Vec::new(),
        };

        let lower = text.to_lowercase();
        let cleaned = self.non_word.replace_all(&lower, " ");

        cleaned
            .unicode_words()
            .filter(|word| self.keep(word))
            .map(|word| self.lemmatizer.lemma(word))
            .collect()
    }

    fn keep(&self, word: &str) -> bool {
        let is_punct = !word.chars().any(char::is_alphanumeric);
        !is_punct && word.chars().count() >= MIN_TOKEN_CHARS && !self.is_stop_word(word)
    }
}
