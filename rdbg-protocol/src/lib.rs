//! Protocol definitions for the rdbg debugger
//!
//! This crate provides the closed command kind registry shared by the
//! debugger client and the debugged target: one stable tag per command
//! variant, the catalogue metadata attached to each tag, and the wire
//! encoding of tags.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Unknown command kind id: {0}")]
    UnknownKind(u8),
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Identity tag for a debugger command variant.
///
/// The set is closed: every command the debugger understands has exactly one
/// kind, and the discriminants are wire-stable so a client and target built
/// from different revisions still agree on what a tag means. New kinds get
/// new ids; existing ids are never reused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandKind {
    Help = 1,
    Break = 2,
    Step = 3,
    Quit = 4,
}

impl CommandKind {
    /// Every kind, in catalogue order.
    ///
    /// The order is the conceptual grouping shown to users by `help`, not an
    /// alphabetical sort, and it is stable for the process lifetime.
    pub const ALL: &'static [CommandKind] = &[
        CommandKind::Help,
        CommandKind::Break,
        CommandKind::Step,
        CommandKind::Quit,
    ];

    /// Primary name the user types to invoke this command.
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Help => "help",
            CommandKind::Break => "break",
            CommandKind::Step => "step",
            CommandKind::Quit => "quit",
        }
    }

    /// Short aliases accepted in addition to the primary name.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CommandKind::Help => &["h", "?"],
            CommandKind::Break => &["b"],
            CommandKind::Step => &["s"],
            CommandKind::Quit => &["q", "exit"],
        }
    }

    /// One-line description used for catalogue listings.
    pub fn summary(&self) -> &'static str {
        match self {
            CommandKind::Help => "Show the command catalogue, command help, or the tutorial",
            CommandKind::Break => "Set a breakpoint in the debugged target",
            CommandKind::Step => "Step the debugged target by one statement",
            CommandKind::Quit => "End the debugging session",
        }
    }

    /// Wire id of this kind.
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Decode a wire id back into a kind.
    pub fn from_id(id: u8) -> Result<Self, ProtocolError> {
        match id {
            1 => Ok(CommandKind::Help),
            2 => Ok(CommandKind::Break),
            3 => Ok(CommandKind::Step),
            4 => Ok(CommandKind::Quit),
            other => Err(ProtocolError::UnknownKind(other)),
        }
    }

    /// Resolve a user-typed word to a kind by exact name or alias match.
    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == word || kind.aliases().contains(&word))
    }
}

/// Common re-exports
pub mod prelude {
    pub use super::{CommandKind, ProtocolError};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_wire_id_round_trip() {
        for kind in CommandKind::ALL {
            let decoded = CommandKind::from_id(kind.id()).unwrap();
            assert_eq!(*kind, decoded);
        }
    }

    #[test]
    fn test_unknown_wire_id_rejected() {
        let err = CommandKind::from_id(0).unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownKind(0)));
        assert!(CommandKind::from_id(200).is_err());
    }

    #[test]
    fn test_one_kind_per_name_and_alias() {
        let mut seen = HashSet::new();
        for kind in CommandKind::ALL {
            assert!(seen.insert(kind.name()), "duplicate name {}", kind.name());
            for alias in kind.aliases() {
                assert!(seen.insert(alias), "duplicate alias {}", alias);
            }
        }
    }

    #[test]
    fn test_parse_matches_names_and_aliases() {
        assert_eq!(CommandKind::parse("help"), Some(CommandKind::Help));
        assert_eq!(CommandKind::parse("?"), Some(CommandKind::Help));
        assert_eq!(CommandKind::parse("b"), Some(CommandKind::Break));
        assert_eq!(CommandKind::parse("exit"), Some(CommandKind::Quit));
        assert_eq!(CommandKind::parse("stepp"), None);
        assert_eq!(CommandKind::parse(""), None);
    }

    #[test]
    fn test_kind_serialization() {
        let serialized = serde_json::to_string(&CommandKind::Step).unwrap();
        let deserialized: CommandKind = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, CommandKind::Step);
    }

    #[test]
    fn test_catalogue_order_is_stable() {
        let first: Vec<&str> = CommandKind::ALL.iter().map(|k| k.name()).collect();
        let second: Vec<&str> = CommandKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "help");
    }
}
