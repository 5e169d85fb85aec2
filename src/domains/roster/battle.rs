//! One-on-one battle simulation.
//!
//! Each side's power score is scaled by an independent variance roll in
//! `[0.9, 1.1)`; the larger rolled value wins. Randomness comes from a
//! [`BattleDice`] so callers can make outcomes reproducible.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use schemars::JsonSchema;
use serde::Serialize;

use super::character::Character;
use super::scoring::{PowerScore, power_score};

const VARIANCE_MIN: f64 = 0.9;
const VARIANCE_MAX: f64 = 1.1;

const DECISIVE_RATIO: f64 = 0.35;
const CLOSE_RATIO: f64 = 0.15;

/// Source of randomness for a battle.
pub trait BattleDice {
    /// A variance multiplier in `[0.9, 1.1)`.
    fn variance(&mut self) -> f64;

    /// A fair coin flip, used to break exact ties.
    fn coin_flip(&mut self) -> bool;
}

/// [`BattleDice`] backed by a `rand` generator.
pub struct RandomDice<R: Rng> {
    rng: R,
}

impl RandomDice<ThreadRng> {
    /// Dice using the thread-local generator.
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomDice<StdRng> {
    /// Reproducible dice for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> BattleDice for RandomDice<R> {
    fn variance(&mut self) -> f64 {
        self.rng.random_range(VARIANCE_MIN..VARIANCE_MAX)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// How lopsided a battle was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub enum Margin {
    #[serde(rename = "decisive")]
    Decisive,
    #[serde(rename = "close")]
    Close,
    #[serde(rename = "very close")]
    VeryClose,
}

impl Margin {
    /// Classify a rolled difference relative to the stronger base score.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > DECISIVE_RATIO {
            Self::Decisive
        } else if ratio > CLOSE_RATIO {
            Self::Close
        } else {
            Self::VeryClose
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Decisive => "decisive",
            Self::Close => "close",
            Self::VeryClose => "very close",
        }
    }
}

impl std::fmt::Display for Margin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A combatant's name and rolled score.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Combatant {
    pub name: String,
    pub score: PowerScore,
}

/// Outcome of a simulated battle.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct BattleResult {
    pub winner: Combatant,
    pub loser: Combatant,
    pub margin: Margin,
    pub log: Vec<String>,
}

/// Simulate a battle between `a` and `b`.
pub fn simulate_battle(a: &Character, b: &Character, dice: &mut dyn BattleDice) -> BattleResult {
    let pa = power_score(a);
    let pb = power_score(b);

    let ra = pa.value() * dice.variance();
    let rb = pb.value() * dice.variance();

    let a_wins = if ra == rb { dice.coin_flip() } else { ra > rb };

    let ratio = (ra - rb).abs() / pa.max(pb).value();
    let margin = Margin::from_ratio(ratio);

    let ((winner, winner_roll), (loser, loser_roll)) = if a_wins {
        ((a, ra), (b, rb))
    } else {
        ((b, rb), (a, ra))
    };

    let log = vec![
        format!(
            "The battle begins: {} vs {}.",
            a.display_name(),
            b.display_name()
        ),
        format!(
            "{} (power ~{}) and {} (power ~{}).",
            a.display_name(),
            pa,
            b.display_name(),
            pb
        ),
        format!(
            "{} prevails with a {} advantage.",
            winner.display_name(),
            margin
        ),
    ];

    BattleResult {
        winner: Combatant {
            name: winner.display_name().to_string(),
            score: PowerScore::new(winner_roll),
        },
        loser: Combatant {
            name: loser.display_name().to_string(),
            score: PowerScore::new(loser_roll),
        },
        margin,
        log,
    }
}
