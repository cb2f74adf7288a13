use std::sync::Arc;

use healthbot::dialogue::greetings::{GOODBYE, HELLO_GUEST, WELCOME_BACK};
use healthbot::dialogue::realizer::CONSULT_DISCLAIMER;
use healthbot::dialogue::{FallbackReason, FixedPicker, Reply, ResponseSelector, FALLBACK_REPLIES};
use healthbot::knowledge::{self, ConditionField, HealthKnowledge};
use healthbot::nlp::{PhraseExtractor, StopWords, Tagger};
use healthbot::telemetry::ReplyKind;

fn selector() -> ResponseSelector {
    ResponseSelector::new(Arc::new(knowledge::builtin::load().unwrap()))
}

fn respond(text: &str) -> Reply {
    selector().respond(text, false, &mut FixedPicker::default())
}

#[test]
fn test_hello_depends_on_sign_in() {
    let sel = selector();
    let mut picker = FixedPicker::default();

    let guest = sel.respond("Hello there", false, &mut picker);
    assert_eq!(guest, Reply::Greeting { text: HELLO_GUEST.to_string() });

    let member = sel.respond("hello", true, &mut picker);
    assert_eq!(member, Reply::Greeting { text: WELCOME_BACK.to_string() });
}

#[test]
fn test_canned_greetings() {
    assert_eq!(respond("Bye!").render(), GOODBYE);
    assert_eq!(
        respond("how are you?").render(),
        "I'm functioning well, thank you! How can I assist you with your health questions?"
    );
    assert_eq!(
        respond("Thanks a lot").render(),
        "You're welcome! Is there anything else I can help you with?"
    );
    assert_eq!(respond("hi").render(), "Hello! How can I assist you today?");
}

#[test]
fn test_greeting_keywords_need_word_boundaries() {
    // "think" contains "hi"; "this" too
    let reply = respond("I think this is a headache");
    assert_eq!(reply.kind(), ReplyKind::Topic);
}

#[test]
fn test_topic_lookup_renders_full_record() {
    let reply = respond("I think I have a headache");
    match &reply {
        Reply::Topic { condition } => assert_eq!(condition.name, "headache"),
        other => panic!("Expected topic, got {:?}", other),
    }

    let text = reply.render();
    assert!(text.starts_with("Here's what I know about Headache:"));

    // Every field appears with its stored value
    let kb = knowledge::builtin::load().unwrap();
    let headache = kb.conditions.get("headache").unwrap();
    for field in ConditionField::ALL {
        let line = format!("{}: {}", field.label(), headache.field(field));
        assert!(text.contains(&line), "missing line {:?}", line);
    }
}

#[test]
fn test_topic_beats_diagnosis() {
    // Names a condition and also describes symptoms
    let reply = respond("Is a runny nose part of the flu?");
    match reply {
        Reply::Topic { condition } => assert_eq!(condition.name, "flu"),
        other => panic!("Expected topic, got {:?}", other),
    }
}

#[test]
fn test_multi_diagnosis_lists_candidates() {
    let reply = respond("I have fatigue, a runny nose and itchy eyes");
    assert_eq!(
        reply,
        Reply::MultiDiagnosis {
            candidates: vec!["flu".to_string(), "allergies".to_string()]
        }
    );

    let text = reply.render();
    assert!(text.contains("- flu\n- allergies"));
    assert!(text.ends_with(CONSULT_DISCLAIMER));
    assert!(!text.contains("Symptoms:"));
}

#[test]
fn test_single_diagnosis_above_threshold() {
    let reply = respond("I have a runny nose and itchy eyes");
    match &reply {
        Reply::SingleDiagnosis { condition, score } => {
            assert_eq!(condition.name, "allergies");
            assert_eq!(*score, 3.0);
        }
        other => panic!("Expected single diagnosis, got {:?}", other),
    }
    let text = reply.render();
    assert!(text.starts_with("Based on your symptoms, the most likely condition is: Allergies"));
    assert!(text.contains("Treatment: Antihistamines"));
}

#[test]
fn test_single_diagnosis_below_threshold() {
    let reply = respond("I have chills");
    match reply {
        Reply::SingleDiagnosis { condition, score } => {
            assert_eq!(condition.name, "fever");
            assert_eq!(score, 1.5);
        }
        other => panic!("Expected single diagnosis, got {:?}", other),
    }
}

#[test]
fn test_broad_symptom_gives_several_candidates() {
    match respond("I have pain in my back") {
        Reply::MultiDiagnosis { candidates } => {
            assert!(candidates.len() > 1);
            assert_eq!(candidates[0], "headache");
        }
        other => panic!("Expected multi diagnosis, got {:?}", other),
    }
}

#[test]
fn test_no_evidence_falls_back() {
    for text in ["", "   ", "xyzzy qwerty"] {
        match respond(text) {
            Reply::Fallback { reason, text } => {
                assert_eq!(reason, FallbackReason::NoEvidence);
                assert!(FALLBACK_REPLIES.contains(&text.as_str()));
            }
            other => panic!("Expected fallback for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_fallback_uses_picker() {
    let sel = selector();
    let reply = sel.respond("xyzzy", false, &mut FixedPicker::new(2));
    assert_eq!(reply.render(), FALLBACK_REPLIES[2]);
}

#[test]
fn test_empty_knowledge_base_falls_back() {
    let sel = ResponseSelector::new(Arc::new(HealthKnowledge::default()));
    let reply = sel.respond("I have a runny nose", false, &mut FixedPicker::default());
    assert!(matches!(
        reply,
        Reply::Fallback { reason: FallbackReason::EmptyKnowledgeBase, .. }
    ));
}

#[test]
fn test_greeting_still_works_without_knowledge() {
    let sel = ResponseSelector::new(Arc::new(HealthKnowledge::default()));
    let reply = sel.respond("bye", false, &mut FixedPicker::default());
    assert_eq!(reply.kind(), ReplyKind::Greeting);
}

#[test]
fn test_reply_serializes_with_kind_tag() {
    let json = serde_json::to_value(respond("hello")).unwrap();
    assert_eq!(json["kind"], "Greeting");
    assert_eq!(json["data"]["text"], HELLO_GUEST);
}

#[test]
fn test_selector_exposes_shared_knowledge() {
    let sel = selector();
    assert_eq!(sel.knowledge().conditions.len(), 32);
    assert!(sel.knowledge().weights.weight("chills").is_some());
}

#[test]
fn test_custom_extractor_changes_phrases() {
    // Without stopwords "have chills" survives whole and carries no weight
    let sel = selector().with_extractor(PhraseExtractor::new(Tagger::default(), StopWords::empty()));
    match sel.respond("I have chills", false, &mut FixedPicker::default()) {
        Reply::Fallback { reason, .. } => assert_eq!(reason, FallbackReason::NoEvidence),
        other => panic!("Expected fallback, got {:?}", other),
    }

    // Default extractor on the same text finds fever
    assert_eq!(respond("I have chills").kind(), ReplyKind::SingleDiagnosis);
}
