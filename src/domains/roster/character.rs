//! Canonical character records.

use schemars::JsonSchema;
use serde::Serialize;

/// Name shown for characters the API returned without one.
pub const UNNAMED: &str = "Unknown";

/// A character as produced by [`normalize_character`](super::normalize_character).
///
/// Every field has a defined value: text fields are `None` rather than
/// missing, numeric stats are finite or `None`, and `transformations` is
/// always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: i64,
    pub name: Option<String>,
    pub race: Option<String>,
    pub affiliation: Option<String>,
    pub ki: Option<f64>,
    pub max_ki: Option<f64>,
    pub transformations: Vec<Transformation>,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// A transformation a character can reach.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Transformation {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
}

impl Character {
    /// The character's name, or [`UNNAMED`] when the API had none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    /// Names of all transformations, in roster order.
    pub fn transformation_names(&self) -> Vec<String> {
        self.transformations.iter().map(|t| t.name.clone()).collect()
    }
}

impl Transformation {
    pub fn new(name: impl Into<String>, multiplier: Option<f64>) -> Self {
        Self {
            name: name.into(),
            multiplier,
        }
    }
}
