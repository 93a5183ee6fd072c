//! Command registry
//!
//! An explicit, constructed-once view of the command kind catalogue. Built at
//! session start and read-only afterwards; both the dispatcher and the help
//! command resolve user-typed words through it.

use rdbg_protocol::CommandKind;

/// Ordered catalogue of the commands available to a session.
///
/// Catalogue order is registration order (the conceptual grouping from
/// [`CommandKind::ALL`]), never a sort, and it is deterministic across
/// repeated enumerations.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    kinds: Vec<CommandKind>,
}

impl CommandRegistry {
    /// Build the full registry over every known command kind.
    pub fn new() -> Self {
        Self::with_kinds(CommandKind::ALL.to_vec())
    }

    /// Build a registry over an explicit subset, preserving the given order.
    pub fn with_kinds(kinds: Vec<CommandKind>) -> Self {
        Self { kinds }
    }

    /// The catalogue, in registration order.
    pub fn kinds(&self) -> &[CommandKind] {
        &self.kinds
    }

    /// Resolve a user-typed word against the registered names and aliases.
    pub fn lookup(&self, word: &str) -> Option<CommandKind> {
        self.kinds
            .iter()
            .copied()
            .find(|kind| kind.name() == word || kind.aliases().contains(&word))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
