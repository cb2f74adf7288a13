use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use super::types::{Condition, HealthKnowledge, KnowledgeBase, SymptomWeights};
use crate::error::KnowledgeError;

/// On-disk shape of a knowledge file.
///
/// Weights are a list of pairs rather than an object so that repeated
/// phrases survive parsing and resolve last-write-wins like the built-in table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeFile {
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub weights: Vec<(String, f64)>,
}

impl KnowledgeFile {
    pub fn into_knowledge(self) -> Result<HealthKnowledge, KnowledgeError> {
        Ok(HealthKnowledge {
            conditions: KnowledgeBase::new(self.conditions)?,
            weights: SymptomWeights::from_pairs(self.weights)?,
        })
    }
}

pub fn parse_json(content: &str) -> Result<HealthKnowledge, KnowledgeError> {
    let file: KnowledgeFile = serde_json::from_str(content)?;
    file.into_knowledge()
}

pub fn load_file(path: &Path) -> Result<HealthKnowledge, KnowledgeError> {
    let content = fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let knowledge = parse_json(&content)?;
    info!(
        "Loaded knowledge file {}: {} conditions, {} weighted phrases",
        path.display(),
        knowledge.conditions.len(),
        knowledge.weights.len()
    );
    Ok(knowledge)
}
