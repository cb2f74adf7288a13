pub mod fallback;
pub mod greetings;
pub mod realizer;
pub mod selector;
pub mod types;

pub use fallback::{FixedPicker, RandomPicker, ReplyPicker, FALLBACK_REPLIES};
pub use realizer::realize;
pub use selector::ResponseSelector;
pub use types::{FallbackReason, Reply};
