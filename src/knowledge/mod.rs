pub mod builtin;
pub mod store;
pub mod types;

pub use types::*;

use std::path::Path;

use crate::error::KnowledgeError;

/// Built-in tables unless a knowledge file is given.
pub fn load(path: Option<&Path>) -> Result<HealthKnowledge, KnowledgeError> {
    match path {
        Some(path) => store::load_file(path),
        None => builtin::load(),
    }
}
