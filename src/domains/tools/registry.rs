//! Tool Registry - metadata for every available tool.

use rmcp::model::Tool;

use super::definitions::{
    CompareFormatsTool, ListSaiyansTool, SaiyanProfileTool, SayHelloTool, SimulateBattleTool,
};

/// Tool registry.
///
/// Single source of truth for tool names and metadata; the router in
/// `router.rs` must register the same set.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            ListSaiyansTool::NAME,
            SaiyanProfileTool::NAME,
            SimulateBattleTool::NAME,
            SayHelloTool::NAME,
            CompareFormatsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListSaiyansTool::to_tool(),
            SaiyanProfileTool::to_tool(),
            SimulateBattleTool::to_tool(),
            SayHelloTool::to_tool(),
            CompareFormatsTool::to_tool(),
        ]
    }
}
