//! Power score heuristic.

use std::cmp::Ordering;
use std::fmt;

use schemars::JsonSchema;
use serde::{Serialize, Serializer};

use super::character::Character;

/// Base power used when a character has neither `maxKi` nor `ki`.
const DEFAULT_BASE_POWER: f64 = 1000.0;

/// Bonus points per unit of transformation multiplier above 1.
const TRANSFORMATION_BONUS_SCALE: f64 = 1000.0;

/// Flat bonus for affiliations containing a "z".
const TEAM_BONUS: f64 = 500.0;

/// Known transformations, most specific first.
const KNOWN_MULTIPLIERS: &[(&str, f64)] = &[
    ("super saiyan 3", 4.0),
    ("super saiyan 2", 3.0),
    ("super saiyan blue", 6.0),
    ("ultra instinct", 8.0),
    ("super saiyan", 2.0),
];

/// Multiplier for transformations the table does not know.
const FALLBACK_MULTIPLIER: f64 = 1.2;

/// Scores below this bound are exact `i64` values (2^63).
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// A rounded power score, finite and at least 1.
///
/// Ki values in the source data reach far beyond `i64`, so the score is
/// carried as `f64`. It serializes as a JSON integer whenever it fits in
/// an `i64` and as a float otherwise.
#[derive(Debug, Clone, Copy, PartialEq, JsonSchema)]
pub struct PowerScore(f64);

impl PowerScore {
    /// Lowest possible score.
    pub const MIN: Self = Self(1.0);

    /// Round `raw` and clamp it into `[1, f64::MAX]`. NaN maps to the minimum.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::MIN;
        }
        Self(raw.round().clamp(1.0, f64::MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// The score as an `i64`, if it fits.
    pub fn as_i64(self) -> Option<i64> {
        (self.0 < I64_BOUND).then_some(self.0 as i64)
    }
}

impl Eq for PowerScore {}

impl PartialOrd for PowerScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PowerScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for PowerScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_i64() {
            Some(score) => write!(f, "{score}"),
            None => write!(f, "{:e}", self.0),
        }
    }
}

impl Serialize for PowerScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_i64() {
            Some(score) => serializer.serialize_i64(score),
            None => serializer.serialize_f64(self.0),
        }
    }
}

/// Compute the power score of a character.
///
/// Pure and deterministic; the result is always at least 1.
pub fn power_score(character: &Character) -> PowerScore {
    let base = character
        .max_ki
        .or(character.ki)
        .unwrap_or(DEFAULT_BASE_POWER);

    let bonus_factor: f64 = character
        .transformations
        .iter()
        .map(|t| {
            t.multiplier
                .unwrap_or_else(|| guessed_multiplier(Some(&t.name)))
                - 1.0
        })
        .sum();
    let bonus = bonus_factor * TRANSFORMATION_BONUS_SCALE;

    let team_bonus = match &character.affiliation {
        Some(affiliation) if affiliation.to_lowercase().contains('z') => TEAM_BONUS,
        _ => 0.0,
    };

    PowerScore::new(base + bonus + team_bonus)
}

/// Guess the multiplier of a transformation from its name.
pub fn guessed_multiplier(name: Option<&str>) -> f64 {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return 1.0;
    };
    let name = name.to_lowercase();

    KNOWN_MULTIPLIERS
        .iter()
        .find(|(pattern, _)| name.contains(pattern))
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(FALLBACK_MULTIPLIER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::roster::Transformation;

    fn fighter(max_ki: Option<f64>, affiliation: Option<&str>) -> Character {
        Character {
            id: 1,
            name: Some("Fighter".to_string()),
            max_ki,
            affiliation: affiliation.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_z_fighter_without_transformations() {
        let c = fighter(Some(5_000_000.0), Some("Z Fighter"));
        assert_eq!(power_score(&c).as_i64(), Some(5_000_500));
    }

    #[test]
    fn test_guessed_super_saiyan_2_bonus() {
        let mut c = fighter(Some(1_000_000.0), None);
        c.transformations = vec![Transformation::new("Super Saiyan 2", None)];
        assert_eq!(power_score(&c).as_i64(), Some(1_002_000));
    }

    #[test]
    fn test_explicit_multiplier_wins_over_guess() {
        let mut c = fighter(Some(1_000_000.0), None);
        c.transformations = vec![Transformation::new("Super Saiyan 2", Some(10.0))];
        assert_eq!(power_score(&c).as_i64(), Some(1_009_000));
    }

    #[test]
    fn test_base_defaults_to_1000() {
        let c = fighter(None, None);
        assert_eq!(power_score(&c).as_i64(), Some(1000));
    }

    #[test]
    fn test_ki_used_when_max_ki_missing() {
        let mut c = fighter(None, None);
        c.ki = Some(4200.0);
        assert_eq!(power_score(&c).as_i64(), Some(4200));
    }

    #[test]
    fn test_score_never_below_one() {
        let mut c = fighter(Some(-50_000.0), None);
        assert_eq!(power_score(&c), PowerScore::MIN);
        c.max_ki = Some(0.0);
        assert_eq!(power_score(&c), PowerScore::MIN);
    }

    #[test]
    fn test_score_is_deterministic() {
        let mut c = fighter(Some(123_456.7), Some("Z fighter"));
        c.transformations = vec![
            Transformation::new("Super Saiyan Blue", None),
            Transformation::new("Kaioken", None),
        ];
        let first = power_score(&c);
        assert_eq!(first, power_score(&c));
        // 123456.7 + (5 + 0.2) * 1000 + 500
        assert_eq!(first.as_i64(), Some(129_157));
    }

    #[test]
    fn test_scores_beyond_i64_stay_ordered() {
        let weak = fighter(Some(1e19), None);
        let strong = fighter(Some(9e24), None);

        assert!(power_score(&strong) > power_score(&weak));
        assert_eq!(power_score(&weak).value(), 1e19);
        assert_eq!(power_score(&strong).value(), 9e24);
        assert_eq!(power_score(&strong).as_i64(), None);
    }

    #[test]
    fn test_score_serializes_as_integer_when_it_fits() {
        let small = serde_json::to_value(PowerScore::new(9_000_500.0)).unwrap();
        assert_eq!(small, serde_json::json!(9_000_500));
        assert!(small.is_i64());

        let huge = serde_json::to_value(PowerScore::new(9e24)).unwrap();
        assert_eq!(huge.as_f64(), Some(9e24));
        assert_eq!(PowerScore::new(9e24).to_string(), "9e24");
        assert_eq!(PowerScore::new(4_200.4).to_string(), "4200");
    }

    #[test]
    fn test_overflowing_score_is_clamped() {
        let mut c = fighter(Some(f64::MAX), Some("Z fighter"));
        c.transformations = vec![Transformation::new("Custom", Some(f64::MAX))];
        assert_eq!(power_score(&c).value(), f64::MAX);
        assert_eq!(PowerScore::new(f64::NAN), PowerScore::MIN);
    }

    #[test]
    fn test_guessed_multiplier_table() {
        assert_eq!(guessed_multiplier(Some("Super Saiyan 3")), 4.0);
        assert_eq!(guessed_multiplier(Some("super saiyan 2")), 3.0);
        assert_eq!(guessed_multiplier(Some("SUPER SAIYAN BLUE")), 6.0);
        assert_eq!(guessed_multiplier(Some("Ultra Instinct -Sign-")), 8.0);
        assert_eq!(guessed_multiplier(Some("Super Saiyan")), 2.0);
        assert_eq!(guessed_multiplier(Some("Great Ape")), 1.2);
        assert_eq!(guessed_multiplier(Some("")), 1.0);
        assert_eq!(guessed_multiplier(None), 1.0);
    }
}
