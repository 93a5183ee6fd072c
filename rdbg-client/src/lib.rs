//! Debugger client engine for rdbg
//!
//! This crate provides the interactive session context, the polymorphic
//! command contract, the command registry and dispatcher, and the help
//! command with its guided tutorial. Target-side command execution and the
//! wire transport live elsewhere; everything here runs on the client.

pub mod cmd;
pub mod dispatch;
pub mod io;
pub mod registry;
pub mod session;
pub mod tutorial;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The session's input stream is closed. Callers treat this as session
    /// termination; it must never be swallowed or retried.
    #[error("End of input: the session's input stream is closed")]
    EndOfInput,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Common re-exports
pub mod prelude {
    pub use super::cmd::{CmdHelp, Command, DebuggerCommand};
    pub use super::dispatch::dispatch_line;
    pub use super::io::{ClientInput, ClientOutput, StdinInput, StdoutOutput};
    pub use super::registry::CommandRegistry;
    pub use super::session::DebuggerClient;
    pub use super::tutorial::{TutorialState, TutorialTopic};
    pub use super::ClientError;
    pub use rdbg_protocol::CommandKind;
}
