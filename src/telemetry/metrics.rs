use std::collections::VecDeque;

use super::event::{ReplyKind, TelemetryEvent};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySnapshot {
    pub reply_stats: ReplyStats,
    pub session_stats: SessionStats,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyStats {
    pub total: u64,
    pub greetings: u64,
    pub topics: u64,
    pub single_diagnoses: u64,
    pub multi_diagnoses: u64,
    pub fallbacks: u64,
    pub max_candidates: usize,
    pub avg_candidates: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStats {
    pub sign_ins: u64,
    pub sign_outs: u64,
    pub summaries: u64,
}

impl ReplyStats {
    pub fn diagnoses(&self) -> u64 {
        self.single_diagnoses + self.multi_diagnoses
    }
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();
    let mut candidate_total = 0usize;

    for event in events {
        match event {
            TelemetryEvent::ReplyEmitted { kind, conditions } => {
                snap.reply_stats.total += 1;
                match kind {
                    ReplyKind::Greeting => snap.reply_stats.greetings += 1,
                    ReplyKind::Topic => snap.reply_stats.topics += 1,
                    ReplyKind::SingleDiagnosis => snap.reply_stats.single_diagnoses += 1,
                    ReplyKind::MultiDiagnosis => {
                        snap.reply_stats.multi_diagnoses += 1;
                        candidate_total += conditions;
                        snap.reply_stats.max_candidates =
                            snap.reply_stats.max_candidates.max(*conditions);
                    }
                    ReplyKind::Fallback => snap.reply_stats.fallbacks += 1,
                }
            }
            TelemetryEvent::SignInChanged { signed_in } => {
                if *signed_in {
                    snap.session_stats.sign_ins += 1;
                } else {
                    snap.session_stats.sign_outs += 1;
                }
            }
            TelemetryEvent::SessionSummary { .. } => snap.session_stats.summaries += 1,
        }
    }

    // Averaged over multi-candidate replies only
    if snap.reply_stats.multi_diagnoses > 0 {
        snap.reply_stats.avg_candidates =
            candidate_total as f64 / snap.reply_stats.multi_diagnoses as f64;
    }

    snap
}
