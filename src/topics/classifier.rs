// Impact classifier: tags one free-text answer with lexicon topics.
//
// A topic applies when either check passes:
//   1. token check: a normalized (lemmatized) token equals one of its keywords
//   2. substring check: one of its keywords occurs in the lowercased raw text
//
// The substring check is what catches multi-word phrases ("síndrome do
// pânico") that tokenization splits apart. Short keywords can also match
// inside longer words through it ("pai" in "paisagem"); that is accepted
// behaviour and not filtered here.

use anyhow::Result;
use serde::Serialize;

use super::lemma::PortugueseLemmatizer;
use super::lexicon::{Lexicon, Topic};
use super::normalize::Normalizer;

/// Which check matched a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    Token,
    Substring,
}

/// One topic matched by an answer, with the keyword that triggered it.
#[derive(Debug, Clone, Serialize)]
pub struct TopicHit {
    pub key: String,
    pub name: String,
    pub keyword: String,
    pub source: MatchSource,
}

/// Every topic matched by one answer, in lexicon order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TopicMatch {
    pub hits: Vec<TopicHit>,
}

impl TopicMatch {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.hits.iter().any(|h| h.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.hits.iter().map(|h| h.key.as_str()).collect()
    }
}

pub struct TopicClassifier {
    lexicon: Lexicon,
    normalizer: Normalizer,
}

impl TopicClassifier {
    /// Classifier over `lexicon` using the Portuguese stopword list and a
    /// lemmatizer restricted to the lexicon's own vocabulary.
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        let lemmatizer = PortugueseLemmatizer::new(lexicon.vocabulary());
        let normalizer = Normalizer::new(Box::new(lemmatizer))?;
        Ok(Self::with_normalizer(lexicon, normalizer))
    }

    pub fn with_normalizer(lexicon: Lexicon, normalizer: Normalizer) -> Self {
        Self {
            lexicon,
            normalizer,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classify one answer. Absent or blank text matches nothing.
    pub fn classify<'a>(&self, text: impl Into<Option<&'a str>>) -> TopicMatch {
        let text = match text.into() {
            Some(t) if !t.trim().is_empty() => t,
            _ => return TopicMatch::default(),
        };

        let tokens = self.normalizer.tokens(Some(text));
        let text_lower = text.to_lowercase();

        let hits = self
            .lexicon
            .topics()
            .iter()
            .filter_map(|topic| match_topic(topic, &tokens, &text_lower))
            .collect();

        TopicMatch { hits }
    }
}

fn match_topic(topic: &Topic, tokens: &[String], text_lower: &str) -> Option<TopicHit> {
    let hit = |keyword: &str, source| TopicHit {
        key: topic.key().to_string(),
        name: topic.name().to_string(),
        keyword: keyword.to_string(),
        source,
    };

    if let Some(token) = tokens.iter().find(|t| topic.has_keyword(t)) {
        return Some(hit(token, MatchSource::Token));
    }

    topic
        .keywords()
        .iter()
        .find(|kw| text_lower.contains(kw.as_str()))
        .map(|kw| hit(kw, MatchSource::Substring))
}
