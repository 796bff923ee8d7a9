//! Strike simulator: probabilistic outcome of one warhead against one target.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use wopr_core::constants::*;
use wopr_core::enums::{GameOutcome, TargetKind, WarheadType};

use crate::targets::Target;

/// Outcome of a single strike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeResult {
    pub target: Target,
    pub warhead: WarheadType,
    pub success: bool,
    pub casualties: u64,
    pub destroyed: bool,
    /// Fallout radius in kilometres.
    pub fallout_radius: f64,
}

/// Losses suffered by one side of a simulated exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeLosses {
    pub casualties: u64,
    pub cities_destroyed: u32,
    pub military_destroyed: u32,
}

impl ExchangeLosses {
    fn record(&mut self, result: &StrikeResult) {
        self.casualties = self.casualties.saturating_add(result.casualties);
        if !result.destroyed {
            return;
        }
        match result.target.kind {
            TargetKind::City => self.cities_destroyed += 1,
            TargetKind::Military => self.military_destroyed += 1,
            TargetKind::Industrial => {}
        }
    }
}

/// Result of `StrikeSimulator::simulate_full_exchange`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarOutcome {
    pub attacker: ExchangeLosses,
    pub defender: ExchangeLosses,
    /// Always `GameOutcome::None`.
    pub winner: GameOutcome,
}

/// Seeded strike model with a per-game history of results.
#[derive(Debug, Clone)]
pub struct StrikeSimulator {
    rng: ChaCha8Rng,
    results: Vec<StrikeResult>,
}

impl StrikeSimulator {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            results: Vec::new(),
        }
    }

    /// Resolve one strike and append it to the history.
    pub fn calculate_strike(&mut self, target: &Target, warhead: WarheadType) -> StrikeResult {
        let yield_mt = warhead.yield_megatons();
        let kill_radius = yield_mt * KILL_RADIUS_KM_PER_MEGATON;
        let fallout_radius = kill_radius * FALLOUT_MULTIPLIER;

        let roll: f64 = self.rng.gen();
        let success = roll < success_probability(target.kind);

        let casualties = match (success, target.kind) {
            (true, TargetKind::City) => city_casualties(target.population, yield_mt),
            (true, _) => self
                .rng
                .gen_range(NON_CITY_CASUALTIES_MIN..=NON_CITY_CASUALTIES_MAX),
            (false, _) => self
                .rng
                .gen_range(NEAR_MISS_CASUALTIES_MIN..=NEAR_MISS_CASUALTIES_MAX),
        };

        let result = StrikeResult {
            target: target.clone(),
            warhead,
            success,
            casualties,
            destroyed: success,
            fallout_radius,
        };
        tracing::debug!(
            target = %target.name,
            ?warhead,
            success,
            casualties,
            "strike resolved"
        );
        self.results.push(result.clone());
        result
    }

    /// Copy of the strike history, oldest first.
    pub fn strike_results(&self) -> Vec<StrikeResult> {
        self.results.clone()
    }

    pub fn reset(&mut self) {
        self.results.clear();
    }

    /// Attacker strikes every defender target, then the defender strikes
    /// every attacker target. Results are appended to the history.
    pub fn simulate_full_exchange(
        &mut self,
        attacker_targets: &[&Target],
        defender_targets: &[&Target],
        warhead: WarheadType,
    ) -> WarOutcome {
        let mut outcome = WarOutcome::default();
        for target in defender_targets {
            let result = self.calculate_strike(target, warhead);
            outcome.defender.record(&result);
        }
        for target in attacker_targets {
            let result = self.calculate_strike(target, warhead);
            outcome.attacker.record(&result);
        }
        tracing::info!(
            attacker = outcome.attacker.casualties,
            defender = outcome.defender.casualties,
            "full exchange simulated"
        );
        outcome
    }

    /// Deterministic casualty estimate for planning, no dice.
    ///
    /// A city with any population always counts for at least one casualty.
    pub fn casualty_estimate(targets: &[&Target]) -> u64 {
        targets
            .iter()
            .map(|t| match t.kind {
                TargetKind::City => (t.population as f64 * ESTIMATE_CITY_FRACTION).ceil() as u64,
                _ => ESTIMATE_NON_CITY,
            })
            .fold(0u64, u64::saturating_add)
    }
}

fn success_probability(kind: TargetKind) -> f64 {
    match kind {
        TargetKind::City => PK_CITY,
        TargetKind::Industrial => PK_INDUSTRIAL,
        TargetKind::Military => PK_MILITARY,
    }
}

/// Direct kills plus fallout, each fraction capped.
fn city_casualties(population: u64, yield_mt: f64) -> u64 {
    let pop = population as f64;
    let direct = (DIRECT_KILL_FRACTION_PER_MT * yield_mt).min(DIRECT_KILL_FRACTION_CAP);
    let fallout = (FALLOUT_FRACTION_PER_MT * yield_mt).min(FALLOUT_FRACTION_CAP);
    (pop * direct + pop * fallout) as u64
}
