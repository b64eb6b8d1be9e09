// Unit tests for the impact classifier.
//
// Tests the public topic API end to end on small inputs: lexicon loading,
// the token and substring checks, and aggregation over a batch.

use escala6x1::topics::aggregate::aggregate;
use escala6x1::topics::classifier::{MatchSource, TopicClassifier};
use escala6x1::topics::lexicon::Lexicon;

fn builtin() -> TopicClassifier {
    TopicClassifier::new(Lexicon::builtin()).unwrap()
}

fn sleep_lexicon() -> TopicClassifier {
    let lexicon = Lexicon::from_json(
        r#"[
            {"key": "sono", "name": "Sono", "keywords": ["Insônia", "dormir", "mal dormido"]},
            {"key": "renda", "name": "", "keywords": ["salário"]}
        ]"#,
    )
    .unwrap();
    TopicClassifier::new(lexicon).unwrap()
}

// ============================================================
// Lexicon
// ============================================================

#[test]
fn builtin_lexicon_has_unique_keys() {
    let lexicon = Lexicon::builtin();
    assert_eq!(lexicon.len(), 18);
    let mut keys: Vec<&str> = lexicon.topics().iter().map(|t| t.key()).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 18);
}

#[test]
fn custom_lexicon_lowercases_keywords_and_names_topics() {
    let classifier = sleep_lexicon();
    let lexicon = classifier.lexicon();
    assert!(lexicon.get("sono").unwrap().has_keyword("insônia"));
    assert_eq!(lexicon.display_name("renda"), "Renda");
}

#[test]
fn invalid_lexicons_are_rejected() {
    assert!(Lexicon::from_json("[]").is_err());
    assert!(Lexicon::from_json("not json").is_err());
    assert!(Lexicon::from_json(
        r#"[{"key": "a", "name": "A", "keywords": ["x"]},
            {"key": "a", "name": "B", "keywords": ["y"]}]"#
    )
    .is_err());
    assert!(Lexicon::from_json(r#"[{"key": "a", "name": "A", "keywords": ["  "]}]"#).is_err());
}

// ============================================================
// Classifier
// ============================================================

#[test]
fn reference_answer_matches_mental_health_and_family() {
    let result = builtin().classify("Tive muita ansiedade e também problemas com meus filhos");
    assert_eq!(result.keys(), vec!["saude_mental", "familia"]);
}

#[test]
fn neutral_answer_matches_nothing() {
    assert!(builtin().classify("Sem impacto").is_empty());
}

#[test]
fn absent_and_blank_answers_match_nothing() {
    let classifier = builtin();
    assert!(classifier.classify(None::<&str>).is_empty());
    assert!(classifier.classify("").is_empty());
    assert!(classifier.classify("   ").is_empty());
}

#[test]
fn inflected_form_matches_through_lemma() {
    let result = sleep_lexicon().classify("Estou dormindo pouco");
    assert_eq!(result.keys(), vec!["sono"]);
    assert_eq!(result.hits[0].source, MatchSource::Token);
    assert_eq!(result.hits[0].keyword, "dormir");
}

#[test]
fn multi_word_keyword_matches_as_substring() {
    let result = sleep_lexicon().classify("Ando mal dormido");
    assert!(result.contains("sono"));
}

#[test]
fn matching_ignores_case() {
    let result = sleep_lexicon().classify("INSÔNIA toda semana");
    assert!(result.contains("sono"));
}

#[test]
fn each_topic_is_reported_once() {
    let result = sleep_lexicon().classify("insônia, insônia e mais insônia; sem dormir");
    assert_eq!(result.len(), 1);
}

#[test]
fn short_keyword_matches_inside_longer_word() {
    // "pai" is a family keyword and the substring check does not look at
    // word boundaries.
    assert!(builtin().classify("Gosto de paisagem").contains("familia"));
}

// ============================================================
// Aggregation
// ============================================================

#[test]
fn aggregate_counts_responses_not_keywords() {
    let summary = aggregate(
        &sleep_lexicon(),
        [
            Some("insônia e mais insônia"),
            Some("não consigo dormir, salário baixo"),
            Some("nada a declarar"),
            None,
        ],
    );
    assert_eq!(summary.responses_analyzed, 3);
    assert_eq!(summary.responses_matched, 2);
    assert_eq!(summary.count_for("sono"), 2);
    assert_eq!(summary.count_for("renda"), 1);
    assert_eq!(summary.topics[0].key, "sono");
}

#[test]
fn aggregate_of_reference_batch() {
    let summary = aggregate(
        &builtin(),
        [
            Some("Tive muita ansiedade e também problemas com meus filhos"),
            Some("Sem impacto"),
        ],
    );
    let (labels, values) = summary.chart_series();
    assert_eq!(labels, vec!["Saúde Mental", "Família"]);
    assert_eq!(values, vec![1, 1]);
}
