//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two belligerents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Us,
    Ussr,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Us, Side::Ussr];

    /// The opposing side.
    pub fn enemy(self) -> Side {
        match self {
            Side::Us => Side::Ussr,
            Side::Ussr => Side::Us,
        }
    }

    /// Short display code ("US" / "USSR").
    pub fn code(self) -> &'static str {
        match self {
            Side::Us => "US",
            Side::Ussr => "USSR",
        }
    }

    /// Full display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Side::Us => "UNITED STATES",
            Side::Ussr => "SOVIET UNION",
        }
    }

    /// Parse a side token: menu number or any accepted name, case-insensitive.
    pub fn parse_token(token: &str) -> Option<Side> {
        match token.trim().to_ascii_uppercase().as_str() {
            "1" | "US" | "USA" | "U.S." | "UNITED STATES" | "AMERICA" => Some(Side::Us),
            "2" | "USSR" | "U.S.S.R." | "SOVIET" | "SOVIET UNION" | "RUSSIA" => Some(Side::Ussr),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Side::parse_token(s).ok_or_else(|| format!("unknown side: {s}"))
    }
}

/// Target category. Drives strike success probability and casualty model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    City,
    Military,
    Industrial,
}

impl TargetKind {
    pub const ALL: [TargetKind; 3] = [TargetKind::City, TargetKind::Military, TargetKind::Industrial];

    pub fn label(self) -> &'static str {
        match self {
            TargetKind::City => "CITY",
            TargetKind::Military => "MILITARY",
            TargetKind::Industrial => "INDUSTRIAL",
        }
    }

    /// Parse a LIST filter word ("CITIES", "military", ...).
    pub fn parse_filter(word: &str) -> Option<TargetKind> {
        match word.trim().to_ascii_uppercase().as_str() {
            "CITY" | "CITIES" => Some(TargetKind::City),
            "MILITARY" | "MIL" | "BASES" => Some(TargetKind::Military),
            "INDUSTRIAL" | "INDUSTRY" | "IND" => Some(TargetKind::Industrial),
            _ => None,
        }
    }
}

/// Warhead type. Determines yield and therefore kill/fallout radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarheadType {
    /// Sub-megaton battlefield weapon.
    Tactical,
    /// Single one-megaton re-entry vehicle.
    #[default]
    Standard,
    /// One re-entry vehicle of a multiple-warhead bus.
    Mirv,
    /// Multi-megaton city buster.
    Strategic,
}

impl WarheadType {
    /// Resolve a warhead name. Unrecognized names fall back to `Standard`.
    pub fn from_name(name: &str) -> WarheadType {
        match name.trim().to_ascii_lowercase().as_str() {
            "tactical" => WarheadType::Tactical,
            "mirv" => WarheadType::Mirv,
            "strategic" => WarheadType::Strategic,
            _ => WarheadType::Standard,
        }
    }

    /// Yield in megatons.
    pub fn yield_megatons(self) -> f64 {
        match self {
            WarheadType::Tactical => 0.1,
            WarheadType::Standard => 1.0,
            WarheadType::Mirv => 0.5,
            WarheadType::Strategic => 5.0,
        }
    }
}

/// Result classification returned to the game-selection loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Win,
    Lose,
    Draw,
    Quit,
    /// Game played to the end with no winner.
    #[default]
    None,
}

/// GTW controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GtwPhase {
    #[default]
    SideSelect,
    CommandLoop,
    Escalation,
    Result,
}

/// Display surface the rendered text is written to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySurface {
    /// Raw terminal; nothing needs escaping.
    #[default]
    Plain,
    /// Markup-interpreting surface where brackets and backslashes are syntax.
    Markup,
}
