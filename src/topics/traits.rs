// Lemmatizer trait, the swap point for base-form reduction.
//
// The default implementation is a small rule-based Portuguese reducer that
// only accepts base forms present in the lexicon vocabulary. A full
// morphological dictionary could be dropped in behind the same trait
// without touching the normalizer or classifier.

/// Reduces a lowercased token to its dictionary base form.
pub trait Lemmatizer: Send + Sync {
    /// Return the base form of `token`, or the token itself when no base
    /// form is known.
    fn lemma(&self, token: &str) -> String;
}

/// Lemmatizer that leaves every token unchanged.
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemma(&self, token: &str) -> String {
        token.to_string()
    }
}
