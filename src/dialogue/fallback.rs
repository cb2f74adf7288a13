use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Replies used when nothing structured can be said.
pub const FALLBACK_REPLIES: &[&str] = &[
    "I don't have enough information to suggest anything yet. Please describe your symptoms.",
    "I'm not sure about that specific condition. Could you provide more details or symptoms?",
    "I don't have information on that particular issue. Is there a related health topic you'd like to know about?",
    "I'm afraid I don't have specific advice for that. Remember, it's always best to consult a healthcare professional for personalized medical advice.",
    "I don't have data on that. Can you rephrase your question or ask about a different health topic?",
];

/// Chooses one reply out of a fixed set.
pub trait ReplyPicker {
    fn pick(&mut self, options: &[&'static str]) -> Option<&'static str>;
}

/// Uniform random choice.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyPicker for RandomPicker {
    fn pick(&mut self, options: &[&'static str]) -> Option<&'static str> {
        options.choose(&mut self.rng).copied()
    }
}

/// Always the same slot (wrapping), for reproducible conversations.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPicker {
    index: usize,
}

impl FixedPicker {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl ReplyPicker for FixedPicker {
    fn pick(&mut self, options: &[&'static str]) -> Option<&'static str> {
        if options.is_empty() {
            return None;
        }
        options.get(self.index % options.len()).copied()
    }
}
