//! Interaction core of the Cyberhack browser terminal.
//!
//! `Session` owns the command table, history ledger and confirmation
//! prompt; `Terminal` exposes it to the page through wasm-bindgen.

pub mod complete;
pub mod config;
pub mod confirm;
pub mod error;
pub mod history;
pub mod logging;
pub mod network;
pub mod shell;
pub mod system;
pub mod table;
pub mod vfs;

pub use complete::CompletionOutcome;
pub use config::{CommandEntry, TerminalConfig};
pub use confirm::ActionTrigger;
pub use error::{Result, TerminalError};
pub use shell::{Output, Session};
pub use system::Terminal;
