//! Tool definitions module.
//!
//! Each tool lives in its own file and exposes `NAME`, `to_tool()` and
//! `create_route()`.

pub mod saiyan;

pub use saiyan::{
    CompareFormatsTool, ListSaiyansTool, SaiyanProfileTool, SayHelloTool, SimulateBattleTool,
};
