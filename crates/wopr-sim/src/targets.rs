//! Target database: the immutable catalog of strikeable locations.

use serde::{Deserialize, Serialize};

use wopr_core::enums::{Side, TargetKind};
use wopr_core::error::{Result, WoprError};

use crate::catalog::CATALOG;

/// A named strikeable location. Identity is `(name, side)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub side: Side,
    pub kind: TargetKind,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
    /// 1 (marginal) to 10 (decisive).
    pub strategic_value: u32,
}

impl Target {
    pub fn new(
        name: &str,
        side: Side,
        kind: TargetKind,
        latitude: f64,
        longitude: f64,
        population: u64,
        strategic_value: u32,
    ) -> Self {
        Self {
            name: name.to_ascii_uppercase(),
            side,
            kind,
            latitude,
            longitude,
            population,
            strategic_value,
        }
    }

    /// Case-insensitive lookup rule: the query is a substring of the name,
    /// or the name starts with it.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_uppercase();
        if query.is_empty() {
            return false;
        }
        self.name.contains(&query) || self.name.starts_with(&query)
    }
}

/// Insertion-ordered, validated collection of targets.
#[derive(Debug, Clone)]
pub struct TargetDatabase {
    targets: Vec<Target>,
}

impl Default for TargetDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TargetDatabase {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        let targets: Vec<Target> = CATALOG
            .iter()
            .map(|&(side, name, kind, lat, lon, population, value)| {
                Target::new(name, side, kind, lat, lon, population, value)
            })
            .collect();
        debug_assert!(Self::validate(&targets).is_ok());
        Self { targets }
    }

    /// Build from a caller-supplied list, enforcing catalog invariants.
    pub fn from_targets(targets: Vec<Target>) -> Result<Self> {
        Self::validate(&targets)?;
        Ok(Self { targets })
    }

    /// Every side needs a city; cities need people; values start at 1.
    pub fn validate(targets: &[Target]) -> Result<()> {
        if targets.is_empty() {
            return Err(WoprError::EmptyCatalog);
        }
        for target in targets {
            if target.name.trim().is_empty() {
                return Err(WoprError::InvalidTarget("empty name".into()));
            }
            if target.strategic_value == 0 {
                return Err(WoprError::InvalidTarget(format!(
                    "{} has strategic value 0",
                    target.name
                )));
            }
            if target.kind == TargetKind::City && target.population == 0 {
                return Err(WoprError::InvalidPopulation(target.name.clone()));
            }
        }
        for side in Side::ALL {
            let has_city = targets
                .iter()
                .any(|t| t.side == side && t.kind == TargetKind::City);
            if !has_city {
                return Err(WoprError::MissingCity(side));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// All targets in insertion order.
    pub fn all(&self) -> &[Target] {
        &self.targets
    }

    pub fn for_side(&self, side: Side) -> Vec<&Target> {
        self.targets.iter().filter(|t| t.side == side).collect()
    }

    /// Filter by a side token ("us", "USSR", "2", ...). Unknown tokens match nothing.
    pub fn for_side_named(&self, token: &str) -> Vec<&Target> {
        match Side::parse_token(token) {
            Some(side) => self.for_side(side),
            None => Vec::new(),
        }
    }

    pub fn by_kind(&self, kind: TargetKind, side: Option<Side>) -> Vec<&Target> {
        self.targets
            .iter()
            .filter(|t| t.kind == kind && side.map_or(true, |s| t.side == s))
            .collect()
    }

    /// First target in insertion order matching `name` (see `Target::matches`).
    ///
    /// Short queries can match several targets; the earliest one wins.
    pub fn find(&self, name: &str, side: Option<Side>) -> Option<&Target> {
        self.targets
            .iter()
            .filter(|t| side.map_or(true, |s| t.side == s))
            .find(|t| t.matches(name))
    }
}
