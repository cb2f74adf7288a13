use healthbot::knowledge::{self, Condition, KnowledgeBase, SymptomWeights};
use healthbot::nlp::ExtractedSymptoms;
use healthbot::scoring::{contains_phrase, score, DIAGNOSIS_THRESHOLD};

fn condition(name: &str, symptoms: &str) -> Condition {
    Condition {
        name: name.to_string(),
        symptoms: symptoms.to_string(),
        causes: String::new(),
        treatment: String::new(),
        prevention: String::new(),
    }
}

fn symptoms(phrases: &[&str]) -> ExtractedSymptoms {
    phrases.iter().map(|p| p.to_string()).collect()
}

#[test]
fn test_every_condition_gets_a_score() {
    let kb = knowledge::builtin::load().unwrap();
    let scores = score(&symptoms(&["chills"]), &kb.conditions, &kb.weights);

    assert_eq!(scores.len(), kb.conditions.len());
    assert_eq!(scores.get("fever"), Some(1.5));
    assert_eq!(scores.get("flu"), Some(0.0));
}

#[test]
fn test_empty_symptoms_score_zero() {
    let kb = knowledge::builtin::load().unwrap();
    let scores = score(&ExtractedSymptoms::new(), &kb.conditions, &kb.weights);

    assert!(scores.iter().all(|(_, s)| s == 0.0));
    assert!(!scores.has_evidence());
}

#[test]
fn test_unweighted_phrase_contributes_nothing() {
    let kb = KnowledgeBase::new(vec![condition("gout", "Swollen toe, redness.")]).unwrap();
    let weights = SymptomWeights::from_pairs(vec![("redness", 1.5)]).unwrap();

    let scores = score(&symptoms(&["swollen toe"]), &kb, &weights);
    assert_eq!(scores.get("gout"), Some(0.0));
}

#[test]
fn test_scores_accumulate_per_matching_phrase() {
    let kb = knowledge::builtin::load().unwrap();
    let scores = score(
        &symptoms(&["fatigue", "runny nose", "itchy eyes"]),
        &kb.conditions,
        &kb.weights,
    );

    assert_eq!(scores.get("flu"), Some(3.0));
    assert_eq!(scores.get("allergies"), Some(3.0));
    assert_eq!(scores.get("common cold"), Some(1.5));
}

#[test]
fn test_adding_phrases_never_lowers_a_score() {
    let kb = knowledge::builtin::load().unwrap();
    let base = score(&symptoms(&["fatigue"]), &kb.conditions, &kb.weights);
    let more = score(&symptoms(&["fatigue", "cough", "pain"]), &kb.conditions, &kb.weights);

    for (name, before) in base.iter() {
        let after = more.get(name).unwrap();
        assert!(after >= before, "{} dropped from {} to {}", name, before, after);
    }

    // Conditions whose symptom text holds an added weighted phrase strictly rise
    let mut risen = Vec::new();
    for condition in kb.conditions.iter() {
        let text = condition.symptoms.to_lowercase();
        if contains_phrase(&text, "cough") || contains_phrase(&text, "pain") {
            let before = base.get(&condition.name).unwrap();
            let after = more.get(&condition.name).unwrap();
            assert!(after > before, "{} did not rise: {} -> {}", condition.name, before, after);
            risen.push(condition.name.as_str());
        }
    }
    assert!(risen.contains(&"common cold"));
    assert!(risen.contains(&"flu"));
}

#[test]
fn test_scoring_is_repeatable() {
    let kb = knowledge::builtin::load().unwrap();
    let input = symptoms(&["pain", "nausea"]);
    let first = score(&input, &kb.conditions, &kb.weights);
    let second = score(&input, &kb.conditions, &kb.weights);
    assert_eq!(first, second);
}

#[test]
fn test_threshold_is_inclusive() {
    let kb = KnowledgeBase::new(vec![
        condition("at", "alpha"),
        condition("below", "beta"),
    ])
    .unwrap();
    let weights =
        SymptomWeights::from_pairs(vec![("alpha", DIAGNOSIS_THRESHOLD), ("beta", 1.999)]).unwrap();

    let scores = score(&symptoms(&["alpha", "beta"]), &kb, &weights);
    assert_eq!(scores.at_least(DIAGNOSIS_THRESHOLD), vec!["at"]);
}

#[test]
fn test_best_prefers_first_defined_on_tie() {
    let kb = KnowledgeBase::new(vec![condition("one", "ache"), condition("two", "ache")]).unwrap();
    let weights = SymptomWeights::from_pairs(vec![("ache", 1.0)]).unwrap();

    let scores = score(&symptoms(&["ache"]), &kb, &weights);
    assert_eq!(scores.best(), Some(("one", 1.0)));
}

#[test]
fn test_substring_containment() {
    assert!(contains_phrase("mild fever, fatigue.", "fever"));
    assert!(contains_phrase("painful joints", "pain"));
    assert!(!contains_phrase("headache", "back pain"));
    assert!(!contains_phrase("anything", ""));
}

#[test]
fn test_to_map_matches_entries() {
    let kb = knowledge::builtin::load().unwrap();
    let scores = score(&symptoms(&["chills"]), &kb.conditions, &kb.weights);
    let map = scores.to_map();
    assert_eq!(map.len(), 32);
    assert_eq!(map.get("fever"), Some(&1.5));
}
