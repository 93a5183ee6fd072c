//! Step command (client side)

use super::DebuggerCommand;
use crate::session::DebuggerClient;
use crate::ClientError;
use rdbg_protocol::CommandKind;
use tracing::debug;

/// Advances a paused target by one statement. Execution itself happens
/// target-side; without an attached target this only reports that fact.
pub struct CmdStep;

impl DebuggerCommand for CmdStep {
    fn kind(&self) -> CommandKind {
        CommandKind::Step
    }

    fn help(&self, client: &mut DebuggerClient) {
        client.print("step");
        client.print("");
        client.print(
            "Runs the next statement in the paused target and stops again, \
             stepping into function calls. Takes no arguments.",
        );
    }

    fn on_client(&mut self, client: &mut DebuggerClient) -> Result<(), ClientError> {
        debug!("step invoked without a target");
        client.print("Not attached to a target process; nothing to step.");
        Ok(())
    }
}
