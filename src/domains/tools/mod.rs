//! Tools domain module.
//!
//! Tools are the functions MCP clients call. All of them read the Saiyan
//! roster through a shared [`RosterFetcher`](crate::domains::roster::RosterFetcher).
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder used by the server handler
//! - `registry.rs` - Tool metadata listing
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/saiyan/`
//! 2. Define params, `execute()`, `to_tool()` and `create_route()`
//! 3. Export it in `definitions/mod.rs`
//! 4. Add its route in `router.rs` and its metadata in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
