//! Saiyan tools module.
//!
//! Thin adapters over the roster domain:
//! - `list`: power ranking of the Z fighter Saiyans
//! - `profile`: per-character analysis
//! - `battle`: one-on-one battle simulation
//! - `hello`: greeting with the warrior's power score
//! - `formats`: JSON vs TOON rendering of the ranking

pub mod battle;
pub mod common;
pub mod formats;
pub mod hello;
pub mod list;
pub mod profile;

pub use battle::{SimulateBattleParams, SimulateBattleTool};
pub use formats::{CompareFormatsParams, CompareFormatsTool};
pub use hello::{SayHelloParams, SayHelloTool};
pub use list::{ListSaiyansParams, ListSaiyansTool, SortBy};
pub use profile::{SaiyanProfileParams, SaiyanProfileTool};
