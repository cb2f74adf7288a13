use std::collections::HashMap;

use crate::knowledge::{ConditionId, KnowledgeBase, SymptomWeights};
use crate::nlp::ExtractedSymptoms;

/// Minimum score for a condition to be listed as plausible.
pub const DIAGNOSIS_THRESHOLD: f64 = 2.0;

/// Matching predicate between a phrase and a condition's symptom text.
///
/// Plain substring containment on lowercase text: "fever" counts inside
/// "mild fever", "pain" counts inside "painful".
pub fn contains_phrase(symptoms_lower: &str, phrase: &str) -> bool {
    !phrase.is_empty() && symptoms_lower.contains(phrase)
}

/// Per-condition scores for one utterance, in knowledge-base order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionScores {
    entries: Vec<(ConditionId, f64)>,
}

impl ConditionScores {
    pub fn get(&self, condition: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(id, _)| id == condition)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(id, score)| (id.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest score; on a tie the condition defined first wins.
    pub fn best(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (id, score) in self.iter() {
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((id, score)),
            }
        }
        best
    }

    /// Conditions scoring at least `threshold`, in knowledge-base order.
    pub fn at_least(&self, threshold: f64) -> Vec<&str> {
        self.iter()
            .filter(|(_, score)| *score >= threshold)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn has_evidence(&self) -> bool {
        self.entries.iter().any(|(_, score)| *score > 0.0)
    }

    pub fn to_map(&self) -> HashMap<ConditionId, f64> {
        self.entries.iter().cloned().collect()
    }
}

/// Scores every condition against the extracted phrases.
///
/// Phrases missing from the weight table contribute nothing.
pub fn score(
    symptoms: &ExtractedSymptoms,
    knowledge: &KnowledgeBase,
    weights: &SymptomWeights,
) -> ConditionScores {
    let weighted: Vec<(&str, f64)> = symptoms
        .iter()
        .filter_map(|phrase| weights.weight(phrase).map(|w| (phrase.as_str(), w)))
        .collect();

    let entries = knowledge
        .iter()
        .map(|condition| {
            let text = condition.symptoms.to_lowercase();
            let total = weighted
                .iter()
                .filter(|(phrase, _)| contains_phrase(&text, phrase))
                .map(|(_, weight)| weight)
                .sum::<f64>();
            (condition.name.clone(), total)
        })
        .collect();

    ConditionScores { entries }
}
