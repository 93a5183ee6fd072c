//! Session I/O seams
//!
//! Commands never touch stdin/stdout directly; they go through these traits
//! so the dispatch and tutorial logic can be driven by scripted input in
//! tests. The stdio implementations are what the CLI wires in.

use crate::ClientError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use tracing::warn;

/// Output sink accepting formatted text lines.
///
/// Writing must not fail for a well-formed context; implementations are
/// expected to absorb transient sink errors rather than surface them to
/// commands.
pub trait ClientOutput {
    fn line(&mut self, text: &str);
}

/// Blocking reader for the next user-typed line.
pub trait ClientInput {
    /// Read the next line, showing `prompt` first where that makes sense.
    ///
    /// Returns [`ClientError::EndOfInput`] once the stream is closed; callers
    /// propagate that upward as session termination.
    fn read_line(&mut self, prompt: &str) -> Result<String, ClientError>;
}

/// Line-oriented stdout sink.
pub struct StdoutOutput;

impl ClientOutput for StdoutOutput {
    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(io::stdout(), "{}", text) {
            warn!("Failed to write to stdout: {}", e);
        }
    }
}

/// Blocking stdin reader with an inline prompt.
pub struct StdinInput;

impl ClientInput for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, ClientError> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut buf = String::new();
        let bytes = io::stdin().lock().read_line(&mut buf)?;
        if bytes == 0 {
            return Err(ClientError::EndOfInput);
        }
        Ok(buf.trim().to_string())
    }
}

/// Test double: serves a fixed script of lines, then reports end of input.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl ClientInput for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<String, ClientError> {
        self.lines.pop_front().ok_or(ClientError::EndOfInput)
    }
}

/// Test double: records every line written to it.
///
/// Clones share the same buffer, so a test can hand one handle to the client
/// and keep another to inspect what was printed.
#[derive(Clone, Default)]
pub struct RecordedOutput {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl ClientOutput for RecordedOutput {
    fn line(&mut self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}
