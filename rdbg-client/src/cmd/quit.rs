//! Quit command

use super::DebuggerCommand;
use crate::session::DebuggerClient;
use crate::ClientError;
use rdbg_protocol::CommandKind;
use tracing::info;

/// Ends the debugging session. The quit decision travels through the session
/// context, so the surrounding loop stays in charge of actually stopping.
pub struct CmdQuit;

impl DebuggerCommand for CmdQuit {
    fn kind(&self) -> CommandKind {
        CommandKind::Quit
    }

    fn help(&self, client: &mut DebuggerClient) {
        client.print("quit");
        client.print("");
        client.print(
            "Ends this debugging session. A debugged target keeps running; \
             only your session goes away.",
        );
    }

    fn on_client(&mut self, client: &mut DebuggerClient) -> Result<(), ClientError> {
        info!(session_id = %client.session_id(), "session quit requested");
        client.print("Bye.");
        client.request_quit();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{RecordedOutput, ScriptedInput};
    use crate::registry::CommandRegistry;

    #[test]
    fn test_quit_sets_the_context_flag() {
        let output = RecordedOutput::new();
        let mut client = DebuggerClient::new(
            CommandRegistry::new(),
            Box::new(ScriptedInput::new(Vec::<String>::new())),
            Box::new(output.clone()),
        );

        CmdQuit.on_client(&mut client).unwrap();
        assert!(client.should_quit());
        assert_eq!(output.lines(), &["Bye."]);
    }
}
