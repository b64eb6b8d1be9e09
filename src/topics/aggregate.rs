// Impact aggregation: topic incidence across a batch of answers.
//
// Counts responses, not keyword hits: an answer that matches a topic through
// several keywords adds one to that topic. Output is sorted by count
// descending; ties keep the order in which topics were first matched,
// because the sort is stable.
//
// Each call builds a fresh summary from the answers it is given. Nothing is
// cached between calls.

use serde::Serialize;

use super::classifier::TopicClassifier;

/// How many answers touched one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicCount {
    pub key: String,
    pub name: String,
    pub count: u32,
}

/// Topic counts for one batch of answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImpactSummary {
    /// Topics with at least one matching answer, highest count first
    pub topics: Vec<TopicCount>,
    /// Non-blank answers that were classified
    pub responses_analyzed: u32,
    /// Answers that matched at least one topic
    pub responses_matched: u32,
}

impl ImpactSummary {
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn count_for(&self, key: &str) -> u32 {
        self.topics
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.count)
            .unwrap_or(0)
    }

    /// Bar chart series: (category labels, values), in display order.
    pub fn chart_series(&self) -> (Vec<String>, Vec<u32>) {
        self.topics
            .iter()
            .map(|t| (t.name.clone(), t.count))
            .unzip()
    }
}

/// Classify every non-blank answer and count matches per topic.
pub fn aggregate<I, S>(classifier: &TopicClassifier, responses: I) -> ImpactSummary
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let topics = classifier.lexicon().topics();
    let mut tally = vec![0u32; topics.len()];
    // Topic indices in first-match order
    let mut first_seen: Vec<usize> = Vec::new();
    let mut analyzed = 0u32;
    let mut matched = 0u32;

    for response in responses.into_iter().flatten() {
        let text = response.as_ref();
        if text.trim().is_empty() {
            continue;
        }
        analyzed += 1;

        let result = classifier.classify(text);
        if !result.is_empty() {
            matched += 1;
        }
        for (i, topic) in topics.iter().enumerate() {
            if result.contains(topic.key()) {
                if tally[i] == 0 {
                    first_seen.push(i);
                }
                tally[i] += 1;
            }
        }
    }

    let mut counts: Vec<TopicCount> = first_seen
        .into_iter()
        .map(|i| TopicCount {
            key: topics[i].key().to_string(),
            name: topics[i].name().to_string(),
            count: tally[i],
        })
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count));

    ImpactSummary {
        topics: counts,
        responses_analyzed: analyzed,
        responses_matched: matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::lexicon::{Lexicon, TopicSpec};

    fn spec(key: &str, keywords: &[&str]) -> TopicSpec {
        TopicSpec {
            key: key.to_string(),
            name: key.to_uppercase(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_reference_batch() {
        let classifier = TopicClassifier::new(Lexicon::builtin()).unwrap();
        let summary = aggregate(
            &classifier,
            [
                Some("Tive muita ansiedade e também problemas com meus filhos"),
                Some("Sem impacto"),
                Some(""),
            ],
        );

        assert_eq!(summary.responses_analyzed, 2);
        assert_eq!(summary.responses_matched, 1);
        assert_eq!(summary.topics.len(), 2);
        assert_eq!(summary.count_for("saude_mental"), 1);
        assert_eq!(summary.count_for("familia"), 1);

        let (labels, values) = summary.chart_series();
        assert_eq!(labels, vec!["Saúde Mental", "Família"]);
        assert_eq!(values, vec![1, 1]);
    }

    #[test]
    fn test_empty_batch_gives_empty_summary() {
        let classifier = TopicClassifier::new(Lexicon::builtin()).unwrap();
        let summary = aggregate(&classifier, Vec::<Option<String>>::new());
        assert!(summary.is_empty());
        assert_eq!(summary, ImpactSummary::default());
    }

    #[test]
    fn test_counts_responses_not_keyword_hits() {
        let lexicon = Lexicon::from_specs(vec![spec("a", &["dor", "dores", "coluna"])]).unwrap();
        let classifier = TopicClassifier::new(lexicon).unwrap();
        let summary = aggregate(&classifier, [Some("dores na coluna, muita dor")]);
        assert_eq!(summary.count_for("a"), 1);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let lexicon = Lexicon::from_specs(vec![
            spec("primeiro", &["xarope"]),
            spec("segundo", &["zebra"]),
            spec("terceiro", &["quiabo"]),
        ])
        .unwrap();
        let classifier = TopicClassifier::new(lexicon).unwrap();

        let summary = aggregate(
            &classifier,
            [Some("zebra"), Some("quiabo"), Some("zebra e xarope"), None],
        );

        let keys: Vec<&str> = summary.topics.iter().map(|t| t.key.as_str()).collect();
        // segundo: 2; terceiro and primeiro tie at 1 in the order they were first seen
        assert_eq!(keys, vec!["segundo", "terceiro", "primeiro"]);
    }

    #[test]
    fn test_ties_follow_first_match_not_lexicon_order() {
        let lexicon = Lexicon::from_specs(vec![
            spec("primeiro", &["xarope"]),
            spec("segundo", &["zebra"]),
        ])
        .unwrap();
        let classifier = TopicClassifier::new(lexicon).unwrap();

        let summary = aggregate(&classifier, [Some("zebra"), Some("xarope")]);
        let keys: Vec<&str> = summary.topics.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["segundo", "primeiro"]);
    }
}
