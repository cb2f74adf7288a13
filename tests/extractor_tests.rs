use healthbot::nlp::{PhraseExtractor, StopWords, SymptomPattern, Tagger};

fn extract(text: &str) -> Vec<String> {
    PhraseExtractor::default().extract(text).into_iter().collect()
}

#[test]
fn test_empty_input_extracts_nothing() {
    assert!(extract("").is_empty());
    assert!(extract("   ").is_empty());
}

#[test]
fn test_adjective_noun_phrases() {
    let phrases = extract("I have a runny nose and itchy eyes");
    assert_eq!(phrases, vec!["itchy eyes", "runny nose"]);
}

#[test]
fn test_root_verb_object_drops_stopwords() {
    // "have pain" keeps only the content word
    assert_eq!(extract("I have pain in my back"), vec!["pain"]);
    assert_eq!(extract("I have chills"), vec!["chills"]);
}

#[test]
fn test_mixed_patterns_in_one_utterance() {
    let phrases = extract("I have fatigue, a runny nose and itchy eyes");
    assert_eq!(phrases, vec!["fatigue", "itchy eyes", "runny nose"]);
}

#[test]
fn test_verb_adjective_pattern() {
    let extractor = PhraseExtractor::default();
    let matches = extractor.matches("I feel dizzy");
    assert!(matches
        .iter()
        .any(|m| m.pattern == SymptomPattern::VerbAdjective && m.phrase.as_deref() == Some("feel dizzy")));
}

#[test]
fn test_phrases_are_lowercased_and_deduplicated() {
    let phrases = extract("Runny nose. Runny nose!");
    assert_eq!(phrases, vec!["runny nose"]);
}

#[test]
fn test_surface_keeps_typed_text() {
    let extractor = PhraseExtractor::default();
    let matches = extractor.matches("A Runny Nose");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].surface, "Runny Nose");
    assert_eq!(matches[0].phrase.as_deref(), Some("runny nose"));
}

#[test]
fn test_without_stopwords_span_is_kept_whole() {
    let extractor = PhraseExtractor::new(Tagger::default(), StopWords::empty());
    assert!(extractor.extract("I have chills").contains("have chills"));
}

#[test]
fn test_gibberish_extracts_nothing() {
    assert!(extract("xyzzy qwerty").is_empty());
}
