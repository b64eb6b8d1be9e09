// Category distributions for the closed survey questions.
//
// `value_counts` feeds the schedule pie chart; `likert_distribution` feeds
// the three ordered impact bar charts. Blank and absent answers are skipped.

use std::collections::HashMap;

use serde::Serialize;

/// The agreement scale used by the impact questions, in display order.
pub const LIKERT_SCALE: [&str; 5] = [
    "Discordo totalmente",
    "Discordo",
    "Neutro",
    "Concordo",
    "Concordo totalmente",
];

/// One bar or pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u32,
}

impl CategoryCount {
    fn new(label: &str, count: u32) -> Self {
        Self {
            label: label.to_string(),
            count,
        }
    }
}

/// Count each distinct answer, highest count first. Ties keep the order
/// in which answers were first seen.
pub fn value_counts<I, S>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for value in values.into_iter().flatten() {
        let label = value.as_ref().trim();
        if label.is_empty() {
            continue;
        }
        let count = counts.entry(label.to_string()).or_insert_with(|| {
            order.push(label.to_string());
            0
        });
        *count += 1;
    }

    let mut result: Vec<CategoryCount> = order
        .iter()
        .map(|label| CategoryCount::new(label, counts[label]))
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

/// Counts ordered along `LIKERT_SCALE`.
///
/// Scale points nobody chose are omitted. Answers outside the scale follow
/// the scale points, highest count first.
pub fn likert_distribution<I, S>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let counts = value_counts(values);

    let mut ordered: Vec<CategoryCount> = LIKERT_SCALE
        .iter()
        .filter_map(|point| counts.iter().find(|c| c.label == *point).cloned())
        .collect();

    ordered.extend(
        counts
            .into_iter()
            .filter(|c| !LIKERT_SCALE.contains(&c.label.as_str())),
    );

    ordered
}

/// Sum of all counts.
pub fn total(counts: &[CategoryCount]) -> u32 {
    counts.iter().map(|c| c.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_counts_descending() {
        let counts = value_counts([Some("Não"), Some("Sim"), Some("Sim"), None, Some("  ")]);
        assert_eq!(
            counts,
            vec![CategoryCount::new("Sim", 2), CategoryCount::new("Não", 1)]
        );
    }

    #[test]
    fn test_value_counts_ties_keep_first_seen_order() {
        let counts = value_counts([Some("b"), Some("a"), Some("c"), Some("a")]);
        let labels: Vec<&str> = counts.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_likert_follows_scale_order() {
        let counts = likert_distribution([
            Some("Concordo totalmente"),
            Some("Concordo totalmente"),
            Some("Discordo"),
            Some("Concordo totalmente"),
            Some("Neutro"),
        ]);
        let labels: Vec<&str> = counts.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Discordo", "Neutro", "Concordo totalmente"]);
        assert_eq!(total(&counts), 5);
    }

    #[test]
    fn test_likert_unknown_answers_go_last() {
        let counts = likert_distribution([Some("Talvez"), Some("Concordo"), Some("Talvez")]);
        assert_eq!(
            counts,
            vec![CategoryCount::new("Concordo", 1), CategoryCount::new("Talvez", 2)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(likert_distribution(Vec::<Option<String>>::new()).is_empty());
        assert!(value_counts(Vec::<Option<&str>>::new()).is_empty());
    }
}
