use std::collections::BTreeSet;
use tracing::debug;

use super::stopwords::StopWords;
use super::tagger::Tagger;
use super::token::{DepRole, PartOfSpeech, Token};

/// Deduplicated, lowercased symptom phrases from one utterance.
pub type ExtractedSymptoms = BTreeSet<String>;

/// Two-token shapes that tend to describe a symptom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymptomPattern {
    /// "runny nose": attributive adjective + noun
    ModifiedNoun,
    /// "have pain": main verb + noun
    RootVerbNoun,
    /// "throat sore"
    NounAdjective,
    /// "feel dizzy"
    VerbAdjective,
}

impl SymptomPattern {
    pub const ALL: [SymptomPattern; 4] = [
        SymptomPattern::ModifiedNoun,
        SymptomPattern::RootVerbNoun,
        SymptomPattern::NounAdjective,
        SymptomPattern::VerbAdjective,
    ];

    pub fn matches(&self, left: &Token, right: &Token) -> bool {
        use PartOfSpeech::*;
        match self {
            SymptomPattern::ModifiedNoun => {
                left.pos == Adj && left.dep == DepRole::Amod && right.pos == Noun
            }
            SymptomPattern::RootVerbNoun => {
                left.pos == Verb && left.dep == DepRole::Root && right.pos == Noun
            }
            SymptomPattern::NounAdjective => left.pos == Noun && right.pos == Adj,
            SymptomPattern::VerbAdjective => left.pos == Verb && right.pos == Adj,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch {
    pub pattern: SymptomPattern,
    /// Span text exactly as typed.
    pub surface: String,
    /// Lowercased span with stopwords dropped; `None` if nothing survived.
    pub phrase: Option<String>,
}

/// Pattern-based symptom phrase extraction over tagged tokens.
#[derive(Debug, Clone, Default)]
pub struct PhraseExtractor {
    tagger: Tagger,
    stopwords: StopWords,
}

impl PhraseExtractor {
    pub fn new(tagger: Tagger, stopwords: StopWords) -> Self {
        Self { tagger, stopwords }
    }

    /// Every pattern hit, in text order. A span hit by several patterns is
    /// reported once per pattern.
    pub fn matches(&self, text: &str) -> Vec<PhraseMatch> {
        let tokens = self.tagger.tag(text);
        let mut found = Vec::new();

        for pair in tokens.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            for pattern in SymptomPattern::ALL {
                if !pattern.matches(left, right) {
                    continue;
                }
                found.push(PhraseMatch {
                    pattern,
                    surface: text[left.start..right.end].to_string(),
                    phrase: self.content_phrase(pair),
                });
            }
        }

        found
    }

    pub fn extract(&self, text: &str) -> ExtractedSymptoms {
        let symptoms: ExtractedSymptoms = self
            .matches(text)
            .into_iter()
            .filter_map(|m| m.phrase)
            .collect();
        debug!("Extracted {} candidate phrases", symptoms.len());
        symptoms
    }

    fn content_phrase(&self, span: &[Token]) -> Option<String> {
        let words: Vec<&str> = span
            .iter()
            .map(|t| t.lower.as_str())
            .filter(|w| !self.stopwords.contains(w))
            .collect();
        if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        }
    }
}
