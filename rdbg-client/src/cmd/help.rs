//! Help command and guided tutorial
//!
//! `help` is the front door of the debugger: with no argument it prints the
//! command catalogue, with a command name it prints that command's help, and
//! with a tutorial keyword it walks the user through the topic sequence one
//! step at a time.

use super::{Command, DebuggerCommand};
use crate::session::DebuggerClient;
use crate::tutorial::{TutorialState, TutorialTopic};
use crate::ClientError;
use rdbg_protocol::CommandKind;
use tracing::debug;

/// Words that route a `help` invocation into the tutorial.
const TUTORIAL_KEYWORDS: &[&str] = &["tutorial", "start"];

/// Inputs that advance the tutorial by one step. The empty string covers a
/// bare enter at the prompt.
const TUTORIAL_NEXT: &[&str] = &["", "next", "n"];

/// Inputs that cancel the tutorial run.
const TUTORIAL_QUIT: &[&str] = &["q", "quit"];

pub struct CmdHelp;

impl CmdHelp {
    /// Print the one-line catalogue entry of every registered command, in
    /// registration order. Output only; no session state changes.
    pub fn help_all(client: &mut DebuggerClient) {
        for kind in client.catalogue() {
            Command::new(kind).list(client);
        }
    }

    /// Print the first-run banner shown once at session start. Deliberately
    /// shorter than `help_all`: it points at help instead of duplicating it.
    pub fn help_started(client: &mut DebuggerClient) {
        client.print("Type 'help' to list commands, or 'help <command>' for details.");
        client.print("New here? 'help tutorial' walks you through the basics.");
    }

    /// Drive one tutorial run against the session's topic list.
    ///
    /// Entering always restarts at step 0, whatever the previous run ended
    /// as. Inside the run: enter or `next` advances exactly one step,
    /// `q`/`quit` cancels, and anything else repeats the current topic.
    /// Closed input propagates as [`ClientError::EndOfInput`]; the machine
    /// never retries a dead stream.
    ///
    /// Returns `false` only when nothing was shown at all (no topics
    /// configured), so the caller knows to print a hint instead.
    fn process_tutorial(&self, client: &mut DebuggerClient) -> Result<bool, ClientError> {
        let topics = client.topics().to_vec();
        if topics.is_empty() {
            debug!("tutorial requested but no topics are configured");
            return Ok(false);
        }

        let mut step = 0;
        client.set_tutorial_state(TutorialState::InProgress { step });
        print_topic(client, &topics, step);

        loop {
            let line = match client.read_line("tutorial> ") {
                Ok(line) => line,
                Err(err) => {
                    // Session is over; leave the run cancelled rather than
                    // dangling in InProgress.
                    client.set_tutorial_state(TutorialState::Cancelled);
                    return Err(err);
                }
            };
            let answer = line.trim().to_lowercase();

            if TUTORIAL_QUIT.contains(&answer.as_str()) {
                client.print("Leaving the tutorial. 'help tutorial' picks it up from the top.");
                client.set_tutorial_state(TutorialState::Cancelled);
                return Ok(true);
            }

            if TUTORIAL_NEXT.contains(&answer.as_str()) {
                step += 1;
                if step == topics.len() {
                    client.print("That's the end of the tutorial. Happy debugging!");
                    client.set_tutorial_state(TutorialState::Completed);
                    return Ok(true);
                }
                client.set_tutorial_state(TutorialState::InProgress { step });
                print_topic(client, &topics, step);
            } else {
                // Unrecognized input repeats the current step, never aborts.
                print_topic(client, &topics, step);
            }
        }
    }
}

fn print_topic(client: &mut DebuggerClient, topics: &[TutorialTopic], step: usize) {
    let topic = &topics[step];
    client.print(&format!("[{}/{}] {}", step + 1, topics.len(), topic.id));
    client.print(&topic.text);
    client.print("(enter/'next' continues, 'q' leaves the tutorial)");
}

impl DebuggerCommand for CmdHelp {
    fn kind(&self) -> CommandKind {
        CommandKind::Help
    }

    fn help(&self, client: &mut DebuggerClient) {
        client.print("help");
        client.print("help <command>");
        client.print("help tutorial");
        client.print("");
        client.print(
            "With no argument, lists every command with a one-line summary. \
             With a command name, prints that command's full help. \
             'help tutorial' (or 'help start') runs a guided walkthrough; \
             inside it, enter or 'next' moves forward and 'q' leaves.",
        );
    }

    fn on_client(&mut self, client: &mut DebuggerClient) -> Result<(), ClientError> {
        let arg = client.arg(0).map(str::to_string);
        match arg.as_deref() {
            None => {
                Self::help_all(client);
                Ok(())
            }
            Some(word) if TUTORIAL_KEYWORDS.contains(&word) => {
                let ran = self.process_tutorial(client)?;
                if !ran {
                    client.print("Nothing to walk through. Type 'help' to continue.");
                }
                Ok(())
            }
            Some(word) => {
                match client.lookup(word) {
                    Some(kind) => Command::new(kind).help(client),
                    None => {
                        debug!(word, "help requested for unknown command");
                        client.print(&format!(
                            "Unrecognized command: '{}'. Type 'help' for the full list.",
                            word
                        ));
                    }
                }
                Ok(())
            }
        }
    }
}
