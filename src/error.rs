//! Error types for the terminal core.
//!
//! Nothing here is fatal: every variant is rendered as a single output
//! line by the dispatcher and the session returns to idle.

/// Errors produced while interpreting input.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("Unknown command: {0}, Execute 'help' to show available commands.")]
    UnknownCommand(String),

    #[error("Unknown subcommand: {sub} for command: {command}")]
    UnknownSubcommand { command: String, sub: String },

    #[error("Invalid input, canceled.")]
    InvalidConfirmationResponse(String),

    #[error("cd: no such directory: {0}")]
    NoSuchDirectory(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TerminalError>;
