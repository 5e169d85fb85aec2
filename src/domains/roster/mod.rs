//! Roster domain module.
//!
//! Everything the tools know about characters lives here: fetching the
//! roster from the public API, normalizing its entries, scoring them and
//! simulating battles. Tools are thin adapters over these functions.
//!
//! ## Architecture
//!
//! - `source.rs` - single HTTP attempt behind the `RosterSource` trait
//! - `fetcher.rs` - retry/backoff loop and envelope unwrapping
//! - `normalize.rs` - raw JSON entry to `Character`
//! - `scoring.rs` - power score heuristic
//! - `battle.rs` - randomized one-on-one battle simulation
//! - `lookup.rs` - name resolution shared by the tools

mod battle;
mod character;
mod error;
mod fetcher;
mod lookup;
mod normalize;
mod scoring;
mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use battle::{BattleDice, BattleResult, Combatant, Margin, RandomDice, simulate_battle};
pub use character::{Character, Transformation, UNNAMED};
pub use error::RosterError;
pub use fetcher::{DEFAULT_RETRIES, MAX_RETRIES, RosterFetcher};
pub use lookup::find_character;
pub use normalize::normalize_character;
pub use scoring::{PowerScore, guessed_multiplier, power_score};
pub use source::{HttpRosterSource, RosterSource};
