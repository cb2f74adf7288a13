pub mod config;
pub mod dialogue;
pub mod error;
pub mod knowledge;
pub mod nlp;
pub mod scoring;
pub mod shell;
pub mod telemetry;

// Re-export the entry points for convenient access
pub use config::BotConfig;
pub use dialogue::{Reply, ResponseSelector};
pub use knowledge::HealthKnowledge;
