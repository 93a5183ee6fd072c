//! Debugger client session context
//!
//! One [`DebuggerClient`] per interactive session. It owns the session's I/O,
//! the command registry, the arguments of the invocation currently being
//! dispatched, and the tutorial state slot. A session is exclusively owned by
//! one logical thread of control; dispatch is strictly sequential, so nothing
//! in here needs locking.

use crate::io::{ClientInput, ClientOutput};
use crate::registry::CommandRegistry;
use crate::tutorial::{default_topics, TutorialState, TutorialTopic};
use crate::ClientError;
use chrono::{DateTime, Utc};
use rdbg_protocol::CommandKind;
use uuid::Uuid;

pub struct DebuggerClient {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    input: Box<dyn ClientInput>,
    output: Box<dyn ClientOutput>,
    registry: CommandRegistry,
    args: Vec<String>,
    tutorial: TutorialState,
    topics: Vec<TutorialTopic>,
    quit: bool,
}

impl DebuggerClient {
    pub fn new(
        registry: CommandRegistry,
        input: Box<dyn ClientInput>,
        output: Box<dyn ClientOutput>,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            input,
            output,
            registry,
            args: Vec::new(),
            tutorial: TutorialState::NotStarted,
            topics: default_topics(),
            quit: false,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Write one formatted line to the session's output sink.
    pub fn print(&mut self, text: &str) {
        self.output.line(text);
    }

    /// Block for the next user-typed line.
    ///
    /// [`ClientError::EndOfInput`] means the session is over; callers pass it
    /// up to the dispatcher rather than retrying.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, ClientError> {
        self.input.read_line(prompt)
    }

    /// Snapshot of the catalogue in registration order.
    ///
    /// Returned by value so callers can enumerate it while rendering through
    /// `&mut self`.
    pub fn catalogue(&self) -> Vec<CommandKind> {
        self.registry.kinds().to_vec()
    }

    /// Resolve a user-typed word in the session's registry.
    pub fn lookup(&self, word: &str) -> Option<CommandKind> {
        self.registry.lookup(word)
    }

    /// Arguments of the invocation currently being dispatched, excluding the
    /// command word itself.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub(crate) fn set_args(&mut self, args: Vec<String>) {
        self.args = args;
    }

    pub fn tutorial_state(&self) -> &TutorialState {
        &self.tutorial
    }

    pub(crate) fn set_tutorial_state(&mut self, state: TutorialState) {
        self.tutorial = state;
    }

    /// The tutorial topic sequence this session will walk through.
    pub fn topics(&self) -> &[TutorialTopic] {
        &self.topics
    }

    /// Replace the built-in topic sequence, e.g. from configuration.
    pub fn set_topics(&mut self, topics: Vec<TutorialTopic>) {
        self.topics = topics;
    }

    /// Ask the surrounding loop to end the session after this dispatch.
    ///
    /// Commands signal quit through context state; `on_client` return values
    /// carry errors only.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
