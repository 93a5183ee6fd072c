//! Interactive session loop
//!
//! Builds the session context, prints the first-run banner, then reads and
//! dispatches one line at a time until the user quits or the input stream
//! closes.

use crate::config::CliConfig;
use anyhow::Result;
use colored::*;
use rdbg_client::cmd::CmdHelp;
use rdbg_client::dispatch::dispatch_line;
use rdbg_client::io::{StdinInput, StdoutOutput};
use rdbg_client::registry::CommandRegistry;
use rdbg_client::session::DebuggerClient;
use rdbg_client::ClientError;
use tracing::{debug, info};

/// Run one interactive debugging session to completion.
pub fn run(config: CliConfig, quiet: bool) -> Result<()> {
    let registry = CommandRegistry::new();
    let mut client = DebuggerClient::new(
        registry,
        Box::new(StdinInput),
        Box::new(StdoutOutput),
    );

    if let Some(topics) = config.tutorial_topics.clone() {
        debug!(count = topics.len(), "using configured tutorial topics");
        client.set_topics(topics);
    }

    let prompt = if config.color {
        config.prompt.as_str().green().bold().to_string()
    } else {
        config.prompt.clone()
    };

    if !quiet {
        println!("{}", "rdbg - interactive debugger".bright_cyan().bold());
        CmdHelp::help_started(&mut client);
        println!();
    }

    info!(session_id = %client.session_id(), "session started");

    loop {
        let line = match client.read_line(&prompt) {
            Ok(line) => line,
            Err(ClientError::EndOfInput) => {
                println!();
                break;
            }
            Err(e) => return Err(e.into()),
        };

        match dispatch_line(&mut client, &line) {
            Ok(()) => {}
            Err(ClientError::EndOfInput) => break,
            Err(e) => return Err(e.into()),
        }

        if client.should_quit() {
            break;
        }
    }

    info!(session_id = %client.session_id(), "session ended");
    if !quiet {
        println!("{} Goodbye!", "👋".yellow());
    }
    Ok(())
}
