//! Command contract and the closed command set
//!
//! Every debugger command satisfies [`DebuggerCommand`]: it can describe
//! itself in one line for the catalogue, print long-form help, and execute
//! its client-side behavior. The variant set is closed — [`Command`] has one
//! arm per [`CommandKind`] and is matched exhaustively, so adding a command
//! means adding a kind, a variant, and nothing else.
//!
//! Commands are per-dispatch values: the dispatcher (or the help command,
//! when enumerating the catalogue) constructs one, drives it, and drops it.
//! No command keeps state across invocations.

pub mod help;

mod breakpoint;
mod quit;
mod step;

pub use breakpoint::CmdBreak;
pub use help::CmdHelp;
pub use quit::CmdQuit;
pub use step::CmdStep;

use crate::session::DebuggerClient;
use crate::ClientError;
use rdbg_protocol::CommandKind;

/// The capability set every command implements.
pub trait DebuggerCommand {
    /// The stable kind tag identifying this command.
    fn kind(&self) -> CommandKind;

    /// Print this command's one-line catalogue entry.
    ///
    /// Must not mutate session state and must not fail; the default renders
    /// straight from the kind metadata so the catalogue never needs
    /// command-specific code.
    fn list(&self, client: &mut DebuggerClient) {
        client.print(&catalogue_entry(self.kind()));
    }

    /// Print this command's full usage description.
    ///
    /// Same contract as `list`: output only, no state changes.
    fn help(&self, client: &mut DebuggerClient);

    /// Execute the command's client-side behavior for the current
    /// invocation. May block on user input and mutate session state; a
    /// quit/continue decision is signaled through the context, not the
    /// return value.
    fn on_client(&mut self, client: &mut DebuggerClient) -> Result<(), ClientError>;
}

/// Render the catalogue line for a kind: padded name plus aliases, then the
/// one-line summary.
pub(crate) fn catalogue_entry(kind: CommandKind) -> String {
    let names = if kind.aliases().is_empty() {
        kind.name().to_string()
    } else {
        format!("{} ({})", kind.name(), kind.aliases().join(", "))
    };
    format!("{:<18} {}", names, kind.summary())
}

/// The closed command set, one variant per kind.
pub enum Command {
    Help(CmdHelp),
    Break(CmdBreak),
    Step(CmdStep),
    Quit(CmdQuit),
}

impl Command {
    /// Construct the command for a kind. Exhaustive by design: a new kind
    /// will not compile until it gets a variant here.
    pub fn new(kind: CommandKind) -> Self {
        match kind {
            CommandKind::Help => Command::Help(CmdHelp),
            CommandKind::Break => Command::Break(CmdBreak),
            CommandKind::Step => Command::Step(CmdStep),
            CommandKind::Quit => Command::Quit(CmdQuit),
        }
    }

    fn inner(&self) -> &dyn DebuggerCommand {
        match self {
            Command::Help(c) => c,
            Command::Break(c) => c,
            Command::Step(c) => c,
            Command::Quit(c) => c,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn DebuggerCommand {
        match self {
            Command::Help(c) => c,
            Command::Break(c) => c,
            Command::Step(c) => c,
            Command::Quit(c) => c,
        }
    }
}

impl DebuggerCommand for Command {
    fn kind(&self) -> CommandKind {
        self.inner().kind()
    }

    fn list(&self, client: &mut DebuggerClient) {
        self.inner().list(client)
    }

    fn help(&self, client: &mut DebuggerClient) {
        self.inner().help(client)
    }

    fn on_client(&mut self, client: &mut DebuggerClient) -> Result<(), ClientError> {
        self.inner_mut().on_client(client)
    }
}
