//! Player commands typed at the GTW command prompt.
//!
//! Commands are parsed from one line of text; unknown words are kept as
//! `Unrecognized` so the controller can answer without changing state.

use serde::{Deserialize, Serialize};

use crate::enums::{Side, TargetKind};

/// All possible command-loop actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GtwCommand {
    /// List targets of `side` (the enemy when absent), optionally by kind.
    List {
        side: Option<Side>,
        kind: Option<TargetKind>,
    },
    /// Add an enemy target to the strike plan. Empty name means "no argument".
    Target { name: String },
    /// Show side, DEFCON and the current strike plan.
    Status,
    /// Show a casualty estimate and a suggested next target.
    Hint,
    Help,
    /// Show the static world map.
    Map,
    /// Request launch (confirmation follows).
    Launch,
    /// Leave the game without launching.
    Quit,
    /// Blank line.
    Empty,
    Unrecognized { input: String },
}

impl GtwCommand {
    /// Parse one input line. Verb matching is case-insensitive.
    pub fn parse(line: &str) -> GtwCommand {
        let line = line.trim();
        if line.is_empty() {
            return GtwCommand::Empty;
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_uppercase().as_str() {
            "LIST" | "TARGETS" => match parse_list_filter(rest) {
                Some((side, kind)) => GtwCommand::List { side, kind },
                None => GtwCommand::Unrecognized {
                    input: line.to_string(),
                },
            },
            "TARGET" | "SELECT" => GtwCommand::Target {
                name: rest.to_ascii_uppercase(),
            },
            "STATUS" => GtwCommand::Status,
            "HINT" => GtwCommand::Hint,
            "HELP" | "?" => GtwCommand::Help,
            "MAP" => GtwCommand::Map,
            "LAUNCH" | "FIRE" => GtwCommand::Launch,
            "QUIT" | "Q" | "ABORT" | "EXIT" => GtwCommand::Quit,
            _ => GtwCommand::Unrecognized {
                input: line.to_string(),
            },
        }
    }
}

/// LIST arguments: nothing, a side, a kind, or a side and a kind in
/// either order. Side names may span two words ("SOVIET UNION").
fn parse_list_filter(rest: &str) -> Option<(Option<Side>, Option<TargetKind>)> {
    if rest.is_empty() {
        return Some((None, None));
    }
    if let Some(side) = Side::parse_token(rest) {
        return Some((Some(side), None));
    }
    if let Some(kind) = TargetKind::parse_filter(rest) {
        return Some((None, Some(kind)));
    }
    if let Some((head, tail)) = rest.rsplit_once(char::is_whitespace) {
        if let (Some(side), Some(kind)) = (Side::parse_token(head), TargetKind::parse_filter(tail)) {
            return Some((Some(side), Some(kind)));
        }
    }
    if let Some((head, tail)) = rest.split_once(char::is_whitespace) {
        if let (Some(kind), Some(side)) = (TargetKind::parse_filter(head), Side::parse_token(tail)) {
            return Some((Some(side), Some(kind)));
        }
    }
    None
}

/// Whether a launch-confirmation answer authorizes the launch.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_uppercase().as_str(), "Y" | "YES")
}
