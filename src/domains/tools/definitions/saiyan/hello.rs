//! Greeting tool.
//!
//! Greets a warrior by name, quoting their power score when the roster
//! knows them. Roster failures only downgrade the greeting.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::common::{error_result, parse_params, structured_result};
use crate::domains::roster::{PowerScore, RosterFetcher, find_character, power_score};

/// Parameters for the greeting tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SayHelloParams {
    /// Name of the Saiyan warrior to greet.
    pub name: String,
}

/// Structured output of the greeting tool.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Greeting {
    pub name: String,
    /// Power score of the matched character, if any.
    pub power: Option<PowerScore>,
    pub message: String,
}

/// Greeting tool.
pub struct SayHelloTool;

impl SayHelloTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "say_hello";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Greet a Saiyan warrior. If the name matches a Z fighter Saiyan in the public API, the greeting includes their power score.";

    /// Build the greeting, looking the warrior up in the roster.
    pub async fn run(params: &SayHelloParams, fetcher: &RosterFetcher) -> Greeting {
        let power = match fetcher.fetch_roster().await {
            Ok(roster) => find_character(&roster, &params.name).map(power_score),
            Err(e) => {
                warn!("Greeting without power score: {}", e);
                None
            }
        };

        let message = match power {
            Some(power) => format!(
                "Hello {}! According to the roster, your power score is {}.",
                params.name, power
            ),
            None => format!("Hello {}! Your power level is over 9000!", params.name),
        };

        Greeting {
            name: params.name.clone(),
            power,
            message,
        }
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn execute(params: &SayHelloParams, fetcher: &RosterFetcher) -> CallToolResult {
        info!("Greeting warrior");

        let greeting = Self::run(params, fetcher).await;
        structured_result(&greeting).unwrap_or_else(|e| error_result(&e))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SayHelloParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<Greeting>()),
            icons: None,
            meta: None,
            title: Some("Saiyan Greeting".into()),
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(fetcher: RosterFetcher) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let fetcher = fetcher.clone();
            async move {
                let params: SayHelloParams = parse_params(args)?;
                Ok(Self::execute(&params, &fetcher).await)
            }
            .boxed()
        })
    }
}
