//! Tutorial state and topic data
//!
//! The tutorial is an ordered, repeatable, cancellable walkthrough of help
//! topics. The topic sequence is data, not control flow: the built-in list
//! below can be replaced wholesale from configuration, and the state machine
//! in the help command only ever indexes into whatever list the session
//! carries.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Where a session stands with respect to the tutorial.
///
/// `Completed` and `Cancelled` are terminal for one run; re-entering the
/// tutorial from any state restarts at step 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TutorialState {
    NotStarted,
    InProgress { step: usize },
    Completed,
    Cancelled,
}

/// One tutorial topic: a short identifier shown in the progress header and
/// the body text printed beneath it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TutorialTopic {
    #[validate(length(min = 1, max = 64))]
    pub id: String,
    #[validate(length(min = 1, max = 4096))]
    pub text: String,
}

impl TutorialTopic {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Validate a configured topic list, failing on the first bad entry.
pub fn validate_topics(topics: &[TutorialTopic]) -> Result<(), ValidationErrors> {
    for topic in topics {
        topic.validate()?;
    }
    Ok(())
}

/// The built-in topic sequence, used when configuration supplies no override.
pub fn default_topics() -> Vec<TutorialTopic> {
    vec![
        TutorialTopic::new(
            "getting around",
            "Every action in rdbg is a command. Type a command name and press \
             enter to run it; 'help' lists everything available, and \
             'help <command>' explains one command in detail.",
        ),
        TutorialTopic::new(
            "breakpoints",
            "Use 'break' to stop the target where you want to look around. \
             Once a target process is attached, execution pauses whenever a \
             breakpoint is hit and the prompt returns to you.",
        ),
        TutorialTopic::new(
            "stepping",
            "When the target is paused, 'step' (or just 's') advances it one \
             statement at a time so you can watch state change as it runs.",
        ),
        TutorialTopic::new(
            "leaving",
            "'quit' (or 'q') ends the debugging session. The target keeps \
             running; only your session goes away.",
        ),
    ]
}
