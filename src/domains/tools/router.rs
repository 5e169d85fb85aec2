//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; the router only hands them
//! the shared roster fetcher.

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::roster::RosterFetcher;

use super::definitions::{
    CompareFormatsTool, ListSaiyansTool, SaiyanProfileTool, SayHelloTool, SimulateBattleTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(fetcher: RosterFetcher) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListSaiyansTool::create_route(fetcher.clone()))
        .with_route(SaiyanProfileTool::create_route(fetcher.clone()))
        .with_route(SimulateBattleTool::create_route(fetcher.clone()))
        .with_route(SayHelloTool::create_route(fetcher.clone()))
        .with_route(CompareFormatsTool::create_route(fetcher))
}
