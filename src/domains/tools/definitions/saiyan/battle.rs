//! Battle simulator tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{error_result, parse_params, structured_result, validate_query};
use crate::domains::roster::{
    BattleResult, Character, RandomDice, RosterFetcher, find_character, simulate_battle,
};
use crate::domains::tools::ToolError;

/// Parameters for the battle tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SimulateBattleParams {
    /// First fighter (name or part of it, at least 2 characters).
    #[schemars(length(min = 2))]
    pub a: String,

    /// Second fighter (name or part of it, at least 2 characters).
    #[schemars(length(min = 2))]
    pub b: String,
}

/// Battle simulator tool.
pub struct SimulateBattleTool;

impl SimulateBattleTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "simulate_battle";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Simulate a simple one-on-one battle between two Z fighter Saiyans. Returns the winner and loser with their rolled scores, the margin (decisive, close or very close) and a short battle log.";

    /// Fetch the roster and resolve both fighters.
    pub async fn resolve(
        params: &SimulateBattleParams,
        fetcher: &RosterFetcher,
    ) -> Result<(Character, Character), ToolError> {
        validate_query("a", &params.a)?;
        validate_query("b", &params.b)?;

        let roster = fetcher.fetch_roster().await?;
        match (
            find_character(&roster, &params.a),
            find_character(&roster, &params.b),
        ) {
            (Some(a), Some(b)) => Ok((a.clone(), b.clone())),
            _ => Err(ToolError::unmatched(&params.a, &params.b)),
        }
    }

    /// Execute the tool logic with thread-local randomness.
    #[instrument(skip_all, fields(a = %params.a, b = %params.b))]
    pub async fn execute(params: &SimulateBattleParams, fetcher: &RosterFetcher) -> CallToolResult {
        info!("Simulating battle");

        let (a, b) = match Self::resolve(params, fetcher).await {
            Ok(fighters) => fighters,
            Err(e) => return error_result(&e),
        };
        let battle = simulate_battle(&a, &b, &mut RandomDice::thread());

        Self::render(&battle).unwrap_or_else(|e| error_result(&e))
    }

    /// Structured result plus a one-line winner summary.
    fn render(battle: &BattleResult) -> Result<CallToolResult, ToolError> {
        info!(
            winner = %battle.winner.name,
            margin = %battle.margin,
            "Battle finished"
        );
        let mut result = structured_result(battle)?;
        result.content.push(Content::text(format!(
            "Winner: {} (margin {}).",
            battle.winner.name, battle.margin
        )));
        Ok(result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SimulateBattleParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<BattleResult>()),
            icons: None,
            meta: None,
            title: Some("Battle Simulator".into()),
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
                let params: SimulateBattleParams = parse_params(args)?;
                Ok(Self::execute(&params, &fetcher).await)
            }
            .boxed()
        })
    }
}
