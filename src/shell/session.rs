use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use uuid::Uuid;

use crate::telemetry::{TelemetryEvent, TelemetryRecorder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
}

/// Per-conversation state: everything the core must not hold.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    signed_in: bool,
    history: VecDeque<ConversationTurn>,
    history_limit: usize,
    pub telemetry: TelemetryRecorder,
}

impl Session {
    pub fn new(signed_in: bool, history_limit: usize) -> Self {
        Self {
            id: SessionId::new(),
            signed_in,
            history: VecDeque::new(),
            history_limit: history_limit.max(1),
            telemetry: TelemetryRecorder::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn signed_in(&self) -> bool {
        self.signed_in
    }

    /// No-op (and no telemetry) when the flag does not change.
    pub fn set_signed_in(&mut self, signed_in: bool) {
        if self.signed_in == signed_in {
            return;
        }
        self.signed_in = signed_in;
        self.telemetry
            .record(TelemetryEvent::SignInChanged { signed_in });
    }

    /// Oldest turns fall off once the limit is reached.
    pub fn push(&mut self, role: Role, text: impl Into<String>) {
        if self.history.len() >= self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(ConversationTurn {
            role,
            text: text.into(),
        });
    }

    pub fn history(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
