// Rule-based Portuguese lemmatizer.
//
// Tries a short list of inflection rules (plural, feminine, verb) and
// keeps the first candidate that exists in the vocabulary. Unknown words
// come back unchanged, so the reducer never invents a form the classifier
// can't match anyway.

use std::collections::HashSet;

use super::traits::Lemmatizer;

/// Plural endings, longest first: (suffix, singular replacement).
const PLURAL_RULES: &[(&str, &str)] = &[
    ("ões", "ão"),
    ("ães", "ão"),
    ("ãos", "ão"),
    ("ais", "al"),
    ("éis", "el"),
    ("eis", "el"),
    ("óis", "ol"),
    ("is", "il"),
    ("ns", "m"),
    ("res", "r"),
    ("zes", "z"),
    ("ses", "s"),
    ("es", ""),
    ("s", ""),
];

/// Feminine to masculine. Only adjective and participle endings: a bare
/// "-a" is usually a verb ("encontra"), not the feminine of a noun
/// ("encontro").
const GENDER_RULES: &[(&str, &str)] = &[
    ("ona", "ão"),
    ("ada", "ado"),
    ("ida", "ido"),
    ("osa", "oso"),
    ("iva", "ivo"),
    ("ica", "ico"),
];

/// Gerund and present third person to infinitive.
const VERB_RULES: &[(&str, &str)] = &[
    ("ando", "ar"),
    ("endo", "er"),
    ("indo", "ir"),
    ("a", "ar"),
    ("e", "er"),
    ("e", "ir"),
];

/// Tokens shorter than this are never reduced.
const MIN_REDUCIBLE_CHARS: usize = 4;

pub struct PortugueseLemmatizer {
    vocabulary: HashSet<String>,
}

impl PortugueseLemmatizer {
    /// `vocabulary` holds the accepted base forms (lowercased).
    pub fn new(vocabulary: HashSet<String>) -> Self {
        Self { vocabulary }
    }

    fn known(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }
}

impl Lemmatizer for PortugueseLemmatizer {
    fn lemma(&self, token: &str) -> String {
        if self.known(token) || token.chars().count() < MIN_REDUCIBLE_CHARS {
            return token.to_string();
        }

        let singulars = apply_rules(token, PLURAL_RULES);

        for singular in &singulars {
            if self.known(singular) {
                return singular.clone();
            }
        }

        // "ansiosas" -> "ansiosa" -> "ansioso"
        for base in std::iter::once(token.to_string()).chain(singulars) {
            for candidate in apply_rules(&base, GENDER_RULES) {
                if self.known(&candidate) {
                    return candidate;
                }
            }
        }

        for candidate in apply_rules(token, VERB_RULES) {
            if self.known(&candidate) {
                return candidate;
            }
        }

        token.to_string()
    }
}

/// Every rewrite of `word` produced by a matching rule, in rule order.
fn apply_rules(word: &str, rules: &[(&str, &str)]) -> Vec<String> {
    rules
        .iter()
        .filter_map(|(suffix, replacement)| {
            word.strip_suffix(suffix)
                .filter(|stem| !stem.is_empty())
                .map(|stem| format!("{stem}{replacement}"))
        })
        .collect()
}
