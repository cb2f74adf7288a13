pub mod scorer;

pub use scorer::{contains_phrase, score, ConditionScores, DIAGNOSIS_THRESHOLD};
