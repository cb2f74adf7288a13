use serde::{Deserialize, Serialize};

use crate::dialogue::Reply;
use crate::shell::session::SessionId;

// Allowed: IDs, Counts, Enums
// Forbidden: Text, Extracted Phrases, Condition Records

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    ReplyEmitted {
        kind: ReplyKind,
        /// Conditions named by the reply (0 for greetings and fallbacks).
        conditions: usize,
    },

    SignInChanged {
        signed_in: bool,
    },

    SessionSummary {
        session_id: SessionId,
        turns: u64,
        diagnoses: u64,
        fallbacks: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReplyKind {
    Greeting,
    Topic,
    SingleDiagnosis,
    MultiDiagnosis,
    Fallback,
}

impl From<&Reply> for ReplyKind {
    fn from(reply: &Reply) -> Self {
        match reply {
            Reply::Greeting { .. } => ReplyKind::Greeting,
            Reply::Topic { .. } => ReplyKind::Topic,
            Reply::SingleDiagnosis { .. } => ReplyKind::SingleDiagnosis,
            Reply::MultiDiagnosis { .. } => ReplyKind::MultiDiagnosis,
            Reply::Fallback { .. } => ReplyKind::Fallback,
        }
    }
}

impl TelemetryEvent {
    /// Content-free summary of a reply.
    pub fn reply(reply: &Reply) -> Self {
        let conditions = match reply {
            Reply::Topic { .. } | Reply::SingleDiagnosis { .. } => 1,
            Reply::MultiDiagnosis { candidates } => candidates.len(),
            Reply::Greeting { .. } | Reply::Fallback { .. } => 0,
        };
        TelemetryEvent::ReplyEmitted {
            kind: ReplyKind::from(reply),
            conditions,
        }
    }
}
