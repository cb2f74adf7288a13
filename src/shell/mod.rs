pub mod command;
pub mod console;
pub mod pages;
pub mod session;

pub use command::ShellCommand;
pub use console::{Console, ShellOutput};
pub use session::{ConversationTurn, Role, Session, SessionId};
