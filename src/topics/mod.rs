// Impact topics: lexicon, normalization, classification and aggregation of
// the free-text survey answers.

pub mod aggregate;
pub mod classifier;
pub mod lemma;
pub mod lexicon;
pub mod normalize;
pub mod traits;
