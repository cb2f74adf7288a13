/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Anything that is not a slash command goes to the selector.
    Say(String),
    History,
    Tips,
    About,
    SignIn,
    SignOut,
    Stats,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ShellCommand::Empty;
        }
        let Some(command) = line.strip_prefix('/') else {
            return ShellCommand::Say(line.to_string());
        };

        match command.trim().to_lowercase().as_str() {
            "history" => ShellCommand::History,
            "tips" => ShellCommand::Tips,
            "about" => ShellCommand::About,
            "signin" | "login" => ShellCommand::SignIn,
            "signout" | "logout" => ShellCommand::SignOut,
            "stats" => ShellCommand::Stats,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => ShellCommand::Unknown(other.to_string()),
        }
    }
}
