//! Per-session reply telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside decision logic (selector, scorer, extractor).
//!
//! # PRIVACY INVARIANT
//! Telemetry events must **NEVER** contain user content (utterances or
//! extracted phrases). Only ids, reply kinds and counts are allowed.

pub mod event;
pub mod metrics;
pub mod recorder;

pub use event::{ReplyKind, TelemetryEvent};
pub use metrics::{compute_snapshot, TelemetrySnapshot};
pub use recorder::TelemetryRecorder;
