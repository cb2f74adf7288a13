//! Symptom phrase extraction: tokenizer, heuristic tagger, pattern matcher.

pub mod extractor;
pub mod lexicon;
pub mod stopwords;
pub mod tagger;
pub mod token;
pub mod tokenizer;

pub use extractor::{ExtractedSymptoms, PhraseExtractor, PhraseMatch, SymptomPattern};
pub use lexicon::Lexicon;
pub use stopwords::StopWords;
pub use tagger::Tagger;
pub use token::{DepRole, PartOfSpeech, Token};
