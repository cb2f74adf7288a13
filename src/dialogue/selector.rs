use std::sync::Arc;
use tracing::{debug, info};

use super::fallback::{ReplyPicker, FALLBACK_REPLIES};
use super::greetings::match_greeting;
use super::types::{FallbackReason, Reply};
use crate::knowledge::HealthKnowledge;
use crate::nlp::PhraseExtractor;
use crate::scoring::{self, DIAGNOSIS_THRESHOLD};

/// Turns one utterance into one reply.
///
/// Priority, first hit wins:
/// 1. greeting / closing keyword
/// 2. a condition named in the text
/// 3. symptom extraction + weighted scoring
/// 4. fallback prompt
///
/// Holds only read-only tables; anything per-session (sign-in flag, picker)
/// is passed in on each call.
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    knowledge: Arc<HealthKnowledge>,
    extractor: PhraseExtractor,
}

impl ResponseSelector {
    pub fn new(knowledge: Arc<HealthKnowledge>) -> Self {
        Self {
            knowledge,
            extractor: PhraseExtractor::default(),
        }
    }

    pub fn with_extractor(mut self, extractor: PhraseExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn knowledge(&self) -> &HealthKnowledge {
        &self.knowledge
    }

    pub fn respond<P>(&self, utterance: &str, signed_in: bool, picker: &mut P) -> Reply
    where
        P: ReplyPicker + ?Sized,
    {
        let lower = utterance.to_lowercase();

        if let Some(text) = match_greeting(&lower, signed_in) {
            return Reply::Greeting {
                text: text.to_string(),
            };
        }

        if let Some(condition) = self.knowledge.conditions.find_mentioned(&lower) {
            debug!("Topic lookup hit: {}", condition.name);
            return Reply::Topic {
                condition: condition.clone(),
            };
        }

        self.diagnose(&lower, picker)
    }

    /// Diagnostic path only: extract, score, pick one or several conditions.
    pub fn diagnose<P>(&self, text_lower: &str, picker: &mut P) -> Reply
    where
        P: ReplyPicker + ?Sized,
    {
        let conditions = &self.knowledge.conditions;
        if conditions.is_empty() {
            return fallback(FallbackReason::EmptyKnowledgeBase, picker);
        }

        let symptoms = self.extractor.extract(text_lower);
        let scores = scoring::score(&symptoms, conditions, &self.knowledge.weights);
        if !scores.has_evidence() {
            debug!("No weighted evidence in {} phrases", symptoms.len());
            return fallback(FallbackReason::NoEvidence, picker);
        }

        let candidates = scores.at_least(DIAGNOSIS_THRESHOLD);
        if candidates.len() > 1 {
            info!("Diagnosis: {} candidates above threshold", candidates.len());
            return Reply::MultiDiagnosis {
                candidates: candidates.into_iter().map(str::to_string).collect(),
            };
        }

        match scores.best().and_then(|(id, score)| conditions.get(id).map(|c| (c, score))) {
            Some((condition, score)) => {
                info!("Diagnosis: single best match (score {:.1})", score);
                Reply::SingleDiagnosis {
                    condition: condition.clone(),
                    score,
                }
            }
            None => fallback(FallbackReason::NoEvidence, picker),
        }
    }
}

fn fallback<P>(reason: FallbackReason, picker: &mut P) -> Reply
where
    P: ReplyPicker + ?Sized,
{
    let text = picker
        .pick(FALLBACK_REPLIES)
        .unwrap_or(FALLBACK_REPLIES[0])
        .to_string();
    Reply::Fallback { reason, text }
}
