//! End-to-end dispatch scenarios
//!
//! Drives full user sessions through `dispatch_line` with scripted input and
//! recorded output, the way the CLI loop does.

use rdbg_client::cmd::CmdHelp;
use rdbg_client::dispatch::dispatch_line;
use rdbg_client::io::{RecordedOutput, ScriptedInput};
use rdbg_client::registry::CommandRegistry;
use rdbg_client::session::DebuggerClient;
use rdbg_client::tutorial::{TutorialState, TutorialTopic};
use rdbg_client::ClientError;
use rdbg_protocol::CommandKind;

fn session(
    kinds: Vec<CommandKind>,
    input: &[&str],
    topics: Option<Vec<TutorialTopic>>,
) -> (DebuggerClient, RecordedOutput) {
    let output = RecordedOutput::new();
    let mut client = DebuggerClient::new(
        CommandRegistry::with_kinds(kinds),
        Box::new(ScriptedInput::new(input.iter().copied())),
        Box::new(output.clone()),
    );
    if let Some(topics) = topics {
        client.set_topics(topics);
    }
    (client, output)
}

fn three_topics() -> Vec<TutorialTopic> {
    vec![
        TutorialTopic::new("topic0", "first"),
        TutorialTopic::new("topic1", "second"),
        TutorialTopic::new("topic2", "third"),
    ]
}

/// Registry of {help, step, quit}: `help` lists exactly three lines, one per
/// command, in registration order.
#[test]
fn help_lists_exactly_the_registered_commands() {
    let kinds = vec![CommandKind::Help, CommandKind::Step, CommandKind::Quit];
    let (mut client, output) = session(kinds, &[], None);

    dispatch_line(&mut client, "help").unwrap();

    let lines = output.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("help"));
    assert!(lines[1].starts_with("step"));
    assert!(lines[2].starts_with("quit"));
}

/// `help step` yields the step command's help text, not the catalogue.
#[test]
fn help_with_name_shows_that_help_only() {
    let (mut client, output) = session(CommandKind::ALL.to_vec(), &[], None);

    dispatch_line(&mut client, "help step").unwrap();

    let text = output.lines().join("\n");
    assert!(text.contains("step"));
    assert!(!text.contains(CommandKind::Break.summary()));
}

/// Tutorial with 3 topics, acknowledged to the end: all topics in order, then
/// completion.
#[test]
fn tutorial_full_run() {
    let (mut client, output) = session(
        CommandKind::ALL.to_vec(),
        &["next", "next", "next"],
        Some(three_topics()),
    );

    dispatch_line(&mut client, "help tutorial").unwrap();

    let headers: Vec<String> = output
        .lines()
        .iter()
        .filter(|line| line.starts_with('['))
        .cloned()
        .collect();
    assert_eq!(
        headers,
        vec!["[1/3] topic0", "[2/3] topic1", "[3/3] topic2"]
    );
    assert!(output.lines().last().unwrap().contains("end of the tutorial"));
    assert_eq!(*client.tutorial_state(), TutorialState::Completed);
}

#[test]
fn tutorial_cancel_run() {
    let (mut client, output) = session(
        CommandKind::ALL.to_vec(),
        &["next", "q"],
        Some(three_topics()),
    );

    dispatch_line(&mut client, "help tutorial").unwrap();

    let text = output.lines().join("\n");
    assert!(text.contains("[1/3] topic0"));
    assert!(text.contains("[2/3] topic1"));
    assert!(!text.contains("topic2"));
    assert_eq!(*client.tutorial_state(), TutorialState::Cancelled);
}

/// Step headers within a run only ever move forward, one at a time.
#[test]
fn tutorial_steps_are_monotonic() {
    let (mut client, output) = session(
        CommandKind::ALL.to_vec(),
        &["next", "nonsense", "next", "next"],
        Some(three_topics()),
    );

    dispatch_line(&mut client, "help tutorial").unwrap();

    let steps: Vec<usize> = output
        .lines()
        .iter()
        .filter(|line| line.starts_with('['))
        .map(|line| {
            line[1..line.find('/').unwrap()]
                .parse::<usize>()
                .unwrap()
        })
        .collect();
    assert!(!steps.is_empty());
    for pair in steps.windows(2) {
        assert!(pair[1] == pair[0] || pair[1] == pair[0] + 1);
    }
    assert_eq!(*client.tutorial_state(), TutorialState::Completed);
}

/// Disconnecting mid-tutorial surfaces as session termination.
#[test]
fn tutorial_eof_terminates_the_session() {
    let (mut client, _) = session(CommandKind::ALL.to_vec(), &[], Some(three_topics()));

    let err = dispatch_line(&mut client, "help tutorial").unwrap_err();
    assert!(matches!(err, ClientError::EndOfInput));
}

/// A quit in the middle of a session flips the context flag and nothing else
/// keeps executing.
#[test]
fn quit_ends_the_session_loop() {
    let (mut client, _) = session(CommandKind::ALL.to_vec(), &[], None);

    dispatch_line(&mut client, "help").unwrap();
    assert!(!client.should_quit());
    dispatch_line(&mut client, "quit").unwrap();
    assert!(client.should_quit());
}

/// The startup banner is not the catalogue.
#[test]
fn started_banner_is_short() {
    let (mut client, output) = session(CommandKind::ALL.to_vec(), &[], None);

    CmdHelp::help_started(&mut client);

    assert!(output.lines().len() < CommandKind::ALL.len());
}
