use healthbot::error::KnowledgeError;
use healthbot::knowledge::store::parse_json;
use healthbot::knowledge::{self, Condition, ConditionField, KnowledgeBase, SymptomWeights};

fn condition(name: &str, symptoms: &str) -> Condition {
    Condition {
        name: name.to_string(),
        symptoms: symptoms.to_string(),
        causes: "c".to_string(),
        treatment: "t".to_string(),
        prevention: "p".to_string(),
    }
}

#[test]
fn test_builtin_tables_load() {
    let kb = knowledge::builtin::load().expect("built-in tables are valid");

    assert_eq!(kb.conditions.len(), 32);
    // 65 listed pairs, "fever", "fatigue" and "swelling" each appear twice
    assert_eq!(kb.weights.len(), 62);
    assert_eq!(kb.weights.weight("chills"), Some(1.5));
    assert_eq!(kb.weights.weight("fever"), Some(2.0));

    let cold = kb.conditions.get("common cold").expect("common cold present");
    assert_eq!(cold.title(), "Common Cold");
    for field in ConditionField::ALL {
        assert!(!cold.field(field).is_empty(), "{:?} should be filled", field);
    }
}

#[test]
fn test_builtin_order_is_preserved() {
    let kb = knowledge::builtin::load().unwrap();
    let names: Vec<&str> = kb.conditions.iter().take(5).map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["fever", "headache", "common cold", "flu", "allergies"]);
}

#[test]
fn test_load_without_path_uses_builtin() {
    let kb = knowledge::load(None).unwrap();
    assert_eq!(kb.conditions.len(), 32);
}

#[test]
fn test_condition_names_are_normalized() {
    let kb = KnowledgeBase::new(vec![condition("  Pink Eye ", "red eyes")]).unwrap();
    assert!(kb.get("pink eye").is_some());
    assert!(kb.get("Pink Eye").is_none());
}

#[test]
fn test_duplicate_condition_rejected() {
    let result = KnowledgeBase::new(vec![condition("flu", "a"), condition("FLU", "b")]);
    assert!(matches!(result, Err(KnowledgeError::DuplicateCondition(name)) if name == "flu"));
}

#[test]
fn test_empty_condition_name_rejected() {
    let result = KnowledgeBase::new(vec![condition("   ", "a")]);
    assert!(matches!(result, Err(KnowledgeError::EmptyConditionName)));
}

#[test]
fn test_duplicate_weights_last_write_wins() {
    let weights = SymptomWeights::from_pairs(vec![("Cough", 1.0), ("cough", 2.5)]).unwrap();
    assert_eq!(weights.len(), 1);
    assert_eq!(weights.weight("cough"), Some(2.5));
}

#[test]
fn test_invalid_weights_rejected() {
    let negative = SymptomWeights::from_pairs(vec![("cough", -1.0)]);
    assert!(matches!(negative, Err(KnowledgeError::InvalidWeight { .. })));

    let nan = SymptomWeights::from_pairs(vec![("cough", f64::NAN)]);
    assert!(matches!(nan, Err(KnowledgeError::InvalidWeight { .. })));
}

#[test]
fn test_find_mentioned_walks_definition_order() {
    let kb = KnowledgeBase::new(vec![
        condition("sore throat", "pain"),
        condition("throat", "pain"),
    ])
    .unwrap();

    let hit = kb.find_mentioned("i have a sore throat").unwrap();
    assert_eq!(hit.name, "sore throat");
    assert!(kb.find_mentioned("nothing here").is_none());
}

#[test]
fn test_parse_json_knowledge_file() {
    let json = r#"{
        "conditions": [
            {"name": "Hay Fever", "symptoms": "Sneezing, itchy eyes.", "causes": "Pollen.",
             "treatment": "Antihistamines.", "prevention": "Stay indoors."}
        ],
        "weights": [["sneezing", 1.0], ["itchy eyes", 1.5], ["sneezing", 2.0]]
    }"#;

    let kb = parse_json(json).unwrap();
    assert_eq!(kb.conditions.len(), 1);
    assert!(kb.conditions.get("hay fever").is_some());
    assert_eq!(kb.weights.weight("sneezing"), Some(2.0));
}

#[test]
fn test_parse_json_weights_optional() {
    let kb = parse_json(r#"{"conditions": []}"#).unwrap();
    assert!(kb.conditions.is_empty());
    assert!(kb.weights.is_empty());
}

#[test]
fn test_malformed_json_is_parse_error() {
    let result = parse_json("{ not json");
    assert!(matches!(result, Err(KnowledgeError::Parse(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join(format!("healthbot-missing-{}.json", uuid::Uuid::new_v4()));
    let result = knowledge::load(Some(&path));
    assert!(matches!(result, Err(KnowledgeError::Io { .. })));
}

#[test]
fn test_load_file_round_trip_from_disk() {
    let path = std::env::temp_dir().join(format!("healthbot-kb-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(
        &path,
        r#"{"conditions": [{"name": "gout", "symptoms": "Joint pain.", "causes": "c",
            "treatment": "t", "prevention": "p"}], "weights": [["joint pain", 2.0]]}"#,
    )
    .unwrap();

    let kb = knowledge::load(Some(&path)).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(kb.conditions.len(), 1);
    assert_eq!(kb.weights.weight("joint pain"), Some(2.0));
}
