//! Line dispatch
//!
//! Turns one user-typed line into one command execution: resolve the first
//! word in the session's registry, park the remaining words on the context as
//! the invocation arguments, construct the command and run its client-side
//! hook. Uniform over command identity; nothing here knows what any
//! particular command does.

use crate::cmd::{Command, DebuggerCommand};
use crate::session::DebuggerClient;
use crate::ClientError;
use tracing::debug;

/// Dispatch one input line against the session.
///
/// Empty lines are no-ops. An unknown command word is a user-visible message,
/// not an error; the session continues. [`ClientError::EndOfInput`] raised by
/// a command (e.g. the user disconnecting mid-tutorial) propagates to the
/// caller as session termination.
pub fn dispatch_line(client: &mut DebuggerClient, line: &str) -> Result<(), ClientError> {
    let mut words = line.split_whitespace();
    let word = match words.next() {
        Some(word) => word,
        None => return Ok(()),
    };

    match client.lookup(word) {
        Some(kind) => {
            debug!(command = kind.name(), "dispatching");
            client.set_args(words.map(str::to_string).collect());
            let mut command = Command::new(kind);
            let result = command.on_client(client);
            client.set_args(Vec::new());
            result
        }
        None => {
            debug!(word, "unknown command word");
            client.print(&format!(
                "Unrecognized command: '{}'. Type 'help' for the full list.",
                word
            ));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{RecordedOutput, ScriptedInput};
    use crate::registry::CommandRegistry;

    fn test_client(input: &[&str]) -> (DebuggerClient, RecordedOutput) {
        let output = RecordedOutput::new();
        let client = DebuggerClient::new(
            CommandRegistry::new(),
            Box::new(ScriptedInput::new(input.iter().copied())),
            Box::new(output.clone()),
        );
        (client, output)
    }

    #[test]
    fn test_empty_line_is_a_noop() {
        let (mut client, output) = test_client(&[]);
        dispatch_line(&mut client, "   ").unwrap();
        assert!(output.lines().is_empty());
    }

    #[test]
    fn test_unknown_word_prints_one_message() {
        let (mut client, output) = test_client(&[]);
        dispatch_line(&mut client, "stepple").unwrap();
        assert_eq!(output.lines().len(), 1);
        assert!(output.lines()[0].contains("stepple"));
        assert!(!client.should_quit());
    }

    #[test]
    fn test_known_word_runs_the_command() {
        let (mut client, output) = test_client(&[]);
        dispatch_line(&mut client, "quit").unwrap();
        assert!(client.should_quit());
        assert_eq!(output.lines(), &["Bye."]);
    }

    #[test]
    fn test_alias_dispatches_like_the_name() {
        let (mut client, _) = test_client(&[]);
        dispatch_line(&mut client, "q").unwrap();
        assert!(client.should_quit());
    }

    #[test]
    fn test_args_are_cleared_after_dispatch() {
        let (mut client, _) = test_client(&[]);
        dispatch_line(&mut client, "help step").unwrap();
        assert!(client.args().is_empty());
    }
}
