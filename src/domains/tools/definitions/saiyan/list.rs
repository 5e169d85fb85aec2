//! Saiyan ranking tool.
//!
//! Lists the Z fighter Saiyans with their estimated power, sorted by power
//! or by name.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::common::{error_result, parse_params, structured_result};
use crate::domains::roster::{Character, PowerScore, RosterFetcher, power_score};
use crate::domains::tools::ToolError;

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 50;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Ranking order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Strongest first.
    #[default]
    Power,
    /// Alphabetical by name.
    Name,
}

/// Parameters for the ranking tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListSaiyansParams {
    /// Maximum number of Saiyans to return (1-50, default: 10).
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1, max = 50))]
    pub limit: usize,

    /// Sort order: "power" (default) or "name".
    #[serde(default)]
    pub sort: SortBy,
}

impl Default for ListSaiyansParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            sort: SortBy::default(),
        }
    }
}

/// One ranked Saiyan.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RankedSaiyan {
    pub id: i64,
    pub name: Option<String>,
    pub power: PowerScore,
    pub image: Option<String>,
    pub transformations: Vec<String>,
}

/// Structured output of the ranking tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ListSaiyansOutput {
    pub items: Vec<RankedSaiyan>,
}

/// Score, sort and truncate a roster.
pub fn rank_roster(roster: &[Character], sort: SortBy, limit: usize) -> Vec<RankedSaiyan> {
    let mut ranked: Vec<RankedSaiyan> = roster
        .iter()
        .map(|c| RankedSaiyan {
            id: c.id,
            name: c.name.clone(),
            power: power_score(c),
            image: c.image.clone(),
            transformations: c.transformation_names(),
        })
        .collect();

    match sort {
        SortBy::Power => ranked.sort_by(|a, b| b.power.cmp(&a.power)),
        SortBy::Name => ranked.sort_by(|a, b| {
            a.name
                .as_deref()
                .unwrap_or_default()
                .cmp(b.name.as_deref().unwrap_or_default())
        }),
    }

    ranked.truncate(limit);
    ranked
}

/// Saiyan ranking tool.
pub struct ListSaiyansTool;

impl ListSaiyansTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_saiyans_z";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the Z fighter Saiyans from the public Dragon Ball API, ranked by estimated power (or sorted by name). Returns ids, names, power scores, images and transformation names.";

    /// Fetch the roster and rank it.
    pub async fn run(
        params: &ListSaiyansParams,
        fetcher: &RosterFetcher,
    ) -> Result<ListSaiyansOutput, ToolError> {
        let limit = params.limit.clamp(1, MAX_LIMIT);
        let roster = fetcher.fetch_roster().await?;
        Ok(ListSaiyansOutput {
            items: rank_roster(&roster, params.sort, limit),
        })
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(limit = params.limit, sort = ?params.sort))]
    pub async fn execute(params: &ListSaiyansParams, fetcher: &RosterFetcher) -> CallToolResult {
        info!("Ranking Saiyans");

        Self::run(params, fetcher)
            .await
            .and_then(|output| {
                info!("Returning {} Saiyan(s)", output.items.len());
                structured_result(&output)
            })
            .unwrap_or_else(|e| error_result(&e))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListSaiyansParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<ListSaiyansOutput>()),
            icons: None,
            meta: None,
            title: Some("Top Saiyans Z".into()),
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
                let params: ListSaiyansParams = parse_params(args)?;
                Ok(Self::execute(&params, &fetcher).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::test_support::{is_error, texts};
    use super::*;
    use crate::domains::roster::testing::{FailingSource, StaticSource};
    use serde_json::json;
    use std::sync::Arc;

    fn fetcher_for(payload: serde_json::Value) -> RosterFetcher {
        RosterFetcher::new(Arc::new(StaticSource::new(payload)))
    }

    fn goku_and_vegeta() -> serde_json::Value {
        json!([
            { "id": 1, "name": "Goku", "maxKi": 9000000, "affiliation": "Z Fighter", "transformations": [] },
            { "id": 2, "name": "Vegeta", "maxKi": 8000000, "affiliation": "Z Fighter", "transformations": [] }
        ])
    }

    #[test]
    fn test_params_defaults() {
        let params: ListSaiyansParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.limit, 10);
        assert_eq!(params.sort, SortBy::Power);
    }

    #[test]
    fn test_params_reject_unknown_sort() {
        assert!(serde_json::from_value::<ListSaiyansParams>(json!({ "sort": "ki" })).is_err());
    }

    #[tokio::test]
    async fn test_top_one_by_power() {
        let params = ListSaiyansParams {
            limit: 1,
            sort: SortBy::Power,
        };
        let output = ListSaiyansTool::run(&params, &fetcher_for(goku_and_vegeta()))
            .await
            .unwrap();

        assert_eq!(
            output.items,
            vec![RankedSaiyan {
                id: 1,
                name: Some("Goku".to_string()),
                power: PowerScore::new(9_000_500.0),
                image: None,
                transformations: vec![],
            }]
        );
    }

    #[tokio::test]
    async fn test_sort_by_name_ascending() {
        let payload = json!([
            { "id": 1, "name": "Vegeta", "maxKi": 1 },
            { "id": 2, "name": "Bardock", "maxKi": 2 },
            { "id": 3, "name": "Goku", "maxKi": 3 }
        ]);
        let params = ListSaiyansParams {
            limit: 10,
            sort: SortBy::Name,
        };
        let output = ListSaiyansTool::run(&params, &fetcher_for(payload)).await.unwrap();
        let ids: Vec<_> = output.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_limit_is_clamped() {
        let params = ListSaiyansParams {
            limit: 0,
            sort: SortBy::Power,
        };
        let output = ListSaiyansTool::run(&params, &fetcher_for(goku_and_vegeta()))
            .await
            .unwrap();
        assert_eq!(output.items.len(), 1);
    }

    #[tokio::test]
    async fn test_transformation_names_are_listed() {
        let payload = json!([{
            "id": 7,
            "name": "Goku",
            "transformations": [{ "name": "Super Saiyan" }, { "name": "Ultra Instinct" }]
        }]);
        let output = ListSaiyansTool::run(&ListSaiyansParams::default(), &fetcher_for(payload))
            .await
            .unwrap();
        assert_eq!(
            output.items[0].transformations,
            vec!["Super Saiyan".to_string(), "Ultra Instinct".to_string()]
        );
    }

    #[tokio::test]
    async fn test_execute_returns_structured_content() {
        let result =
            ListSaiyansTool::execute(&ListSaiyansParams::default(), &fetcher_for(goku_and_vegeta()))
                .await;
        assert!(!is_error(&result));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["items"][0]["name"], "Goku");
        assert_eq!(structured["items"][1]["power"], 8_000_500);
    }

    #[tokio::test]
    async fn test_ranking_beyond_i64_keeps_order() {
        let payload = json!([
            { "id": 1, "name": "Weak", "maxKi": 1e19 },
            { "id": 2, "name": "Strong", "maxKi": 9e24 }
        ]);
        let output = ListSaiyansTool::run(&ListSaiyansParams::default(), &fetcher_for(payload))
            .await
            .unwrap();

        let ids: Vec<_> = output.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(output.items[0].power > output.items[1].power);
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_reports_fetch_failure() {
        let fetcher = RosterFetcher::new(Arc::new(FailingSource(500)));
        let result = ListSaiyansTool::execute(&ListSaiyansParams::default(), &fetcher).await;
        assert!(is_error(&result));
        assert!(texts(&result)[0].contains("HTTP 500"));
    }
}
