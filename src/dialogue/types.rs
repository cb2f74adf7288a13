use serde::{Deserialize, Serialize};

use crate::knowledge::{Condition, ConditionId};
use crate::telemetry::event::ReplyKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FallbackReason {
    /// No extracted phrase carried any weight for any condition.
    NoEvidence,
    /// There is nothing to diagnose against.
    EmptyKnowledgeBase,
}

/// Structured answer to one utterance. Rendering is left to the realizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum Reply {
    Greeting { text: String },
    /// The utterance named a condition outright.
    Topic { condition: Condition },
    SingleDiagnosis { condition: Condition, score: f64 },
    /// Several conditions reached the threshold; no single record is shown.
    MultiDiagnosis { candidates: Vec<ConditionId> },
    Fallback { reason: FallbackReason, text: String },
}

impl Reply {
    pub fn kind(&self) -> ReplyKind {
        ReplyKind::from(self)
    }

    pub fn render(&self) -> String {
        super::realizer::realize(self)
    }
}
