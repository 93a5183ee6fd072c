//! Breakpoint command (client side)

use super::DebuggerCommand;
use crate::session::DebuggerClient;
use crate::ClientError;
use rdbg_protocol::CommandKind;
use tracing::debug;

/// Sets breakpoints in the debugged target. The target-side half runs in the
/// debugged process; without an attached target this only reports that fact.
pub struct CmdBreak;

impl DebuggerCommand for CmdBreak {
    fn kind(&self) -> CommandKind {
        CommandKind::Break
    }

    fn help(&self, client: &mut DebuggerClient) {
        client.print("break <file>:<line>");
        client.print("break <function>");
        client.print("");
        client.print(
            "Sets a breakpoint at a source location or at the entry of a \
             function. The target stops and hands control back to you \
             whenever a breakpoint is hit.",
        );
    }

    fn on_client(&mut self, client: &mut DebuggerClient) -> Result<(), ClientError> {
        debug!(args = ?client.args(), "break invoked without a target");
        client.print("Not attached to a target process; nothing to break in.");
        Ok(())
    }
}
