//! Domains module containing business logic organized by bounded contexts.
//!
//! - `roster`: the Saiyan roster and every algorithm over it
//! - `tools`: MCP tool adapters over the roster

pub mod roster;
pub mod tools;
