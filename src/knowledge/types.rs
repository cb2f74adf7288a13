use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::KnowledgeError;

/// Canonical lowercase condition name.
pub type ConditionId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub name: ConditionId,
    pub symptoms: String,
    pub causes: String,
    pub treatment: String,
    pub prevention: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionField {
    Symptoms,
    Causes,
    Treatment,
    Prevention,
}

impl ConditionField {
    pub const ALL: [ConditionField; 4] = [
        ConditionField::Symptoms,
        ConditionField::Causes,
        ConditionField::Treatment,
        ConditionField::Prevention,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConditionField::Symptoms => "Symptoms",
            ConditionField::Causes => "Causes",
            ConditionField::Treatment => "Treatment",
            ConditionField::Prevention => "Prevention",
        }
    }
}

impl Condition {
    pub fn field(&self, field: ConditionField) -> &str {
        match field {
            ConditionField::Symptoms => &self.symptoms,
            ConditionField::Causes => &self.causes,
            ConditionField::Treatment => &self.treatment,
            ConditionField::Prevention => &self.prevention,
        }
    }

    /// "common cold" -> "Common Cold"
    pub fn title(&self) -> String {
        self.name
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Ordered, read-only set of conditions.
///
/// Definition order is significant: topic lookup and tie-breaking both walk
/// the conditions in the order they were loaded.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    conditions: Vec<Condition>,
    index: HashMap<ConditionId, usize>,
}

impl KnowledgeBase {
    /// Names are trimmed and lowercased; an empty or repeated name is rejected.
    pub fn new(conditions: Vec<Condition>) -> Result<Self, KnowledgeError> {
        let mut kb = Self::default();
        for mut condition in conditions {
            let name = condition.name.trim().to_lowercase();
            if name.is_empty() {
                return Err(KnowledgeError::EmptyConditionName);
            }
            if kb.index.contains_key(&name) {
                return Err(KnowledgeError::DuplicateCondition(name));
            }
            condition.name = name.clone();
            kb.index.insert(name, kb.conditions.len());
            kb.conditions.push(condition);
        }
        Ok(kb)
    }

    pub fn get(&self, name: &str) -> Option<&Condition> {
        self.index.get(name).and_then(|&i| self.conditions.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// First condition (definition order) whose name occurs inside `text_lower`.
    pub fn find_mentioned(&self, text_lower: &str) -> Option<&Condition> {
        self.conditions
            .iter()
            .find(|c| text_lower.contains(c.name.as_str()))
    }
}

/// Symptom phrase -> weight. Keys are lowercase.
#[derive(Debug, Clone, Default)]
pub struct SymptomWeights {
    weights: HashMap<String, f64>,
}

impl SymptomWeights {
    /// Later duplicates overwrite earlier ones.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, KnowledgeError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut weights = HashMap::new();
        for (phrase, weight) in pairs {
            let phrase = phrase.as_ref().trim().to_lowercase();
            if !weight.is_finite() || weight < 0.0 {
                return Err(KnowledgeError::InvalidWeight { phrase, weight });
            }
            weights.insert(phrase, weight);
        }
        Ok(Self { weights })
    }

    pub fn weight(&self, phrase: &str) -> Option<f64> {
        self.weights.get(phrase).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Both tables, loaded once and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct HealthKnowledge {
    pub conditions: KnowledgeBase,
    pub weights: SymptomWeights,
}
