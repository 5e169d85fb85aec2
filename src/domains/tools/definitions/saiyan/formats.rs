//! JSON vs TOON comparison tool.
//!
//! Renders the top of the power ranking twice, as pretty JSON and as a
//! TOON table, so clients can compare the token footprint of both.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::common::{error_result, parse_params};
use crate::domains::roster::{Character, PowerScore, RosterFetcher, power_score};
use crate::domains::tools::ToolError;

const DEFAULT_LIMIT: usize = 3;
const MAX_LIMIT: usize = 50;
const ENTITY: &str = "saiyans";
const COLUMNS: [&str; 4] = ["id", "name", "power", "race"];

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Parameters for the comparison tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CompareFormatsParams {
    /// Name of the person asking, used in the intro line.
    pub name: String,

    /// Number of Saiyans to render (1-50, default: 3).
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1, max = 50))]
    pub limit: usize,
}

/// One flat table row.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SaiyanRow {
    pub id: i64,
    pub name: String,
    pub power: PowerScore,
    pub race: String,
}

impl SaiyanRow {
    fn of(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.display_name().to_string(),
            power: power_score(character),
            race: character.race.clone().unwrap_or_default(),
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.power.to_string(),
            self.race.clone(),
        ]
    }
}

/// Structured output of the comparison tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct FormatComparison {
    pub saiyans: Vec<SaiyanRow>,
    pub json: String,
    pub toon: String,
}

/// Render rows as a TOON table.
///
/// The header is `entity[N]{k1,k2,..}:` and each row follows on its own
/// line, indented by two spaces with comma-joined cells. An empty table
/// renders as `entity[]{}:`.
pub fn to_toon(entity: &str, keys: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return format!("{entity}[]{{}}:");
    }

    let mut out = format!("{entity}[{}]{{{}}}:", rows.len(), keys.join(","));
    for row in rows {
        out.push_str("\n  ");
        out.push_str(&row.join(","));
    }
    out
}

/// JSON vs TOON comparison tool.
pub struct CompareFormatsTool;

impl CompareFormatsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "compare_formats";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Render the strongest Z fighter Saiyans both as JSON and as a TOON table to compare token usage of the two formats.";

    /// Fetch the roster and render the strongest entries in both formats.
    pub async fn run(
        params: &CompareFormatsParams,
        fetcher: &RosterFetcher,
    ) -> Result<FormatComparison, ToolError> {
        let limit = params.limit.clamp(1, MAX_LIMIT);
        let roster = fetcher.fetch_roster().await?;

        let mut saiyans: Vec<SaiyanRow> = roster.iter().map(SaiyanRow::of).collect();
        saiyans.sort_by(|a, b| b.power.cmp(&a.power));
        saiyans.truncate(limit);

        let json = serde_json::to_string_pretty(&saiyans)?;
        let rows: Vec<Vec<String>> = saiyans.iter().map(SaiyanRow::cells).collect();
        let toon = to_toon(ENTITY, &COLUMNS, &rows);

        Ok(FormatComparison {
            saiyans,
            json,
            toon,
        })
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(limit = params.limit))]
    pub async fn execute(params: &CompareFormatsParams, fetcher: &RosterFetcher) -> CallToolResult {
        info!("Comparing formats");

        Self::run(params, fetcher)
            .await
            .and_then(|comparison| Self::render(&params.name, &comparison))
            .unwrap_or_else(|e| error_result(&e))
    }

    fn render(name: &str, comparison: &FormatComparison) -> Result<CallToolResult, ToolError> {
        info!(
            json_len = comparison.json.len(),
            toon_len = comparison.toon.len(),
            "Rendered both formats"
        );

        let mut result = CallToolResult::success(vec![
            Content::text(format!(
                "Hello {name}. Here is the same data set as JSON and as TOON for comparison."
            )),
            Content::text(format!("\n--- JSON ---\n{}", comparison.json)),
            Content::text(format!("\n--- TOON ---\n{}", comparison.toon)),
        ]);
        result.structured_content = Some(serde_json::to_value(comparison)?);
        Ok(result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CompareFormatsParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<FormatComparison>()),
            icons: None,
            meta: None,
            title: Some("Compare JSON vs TOON".into()),
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
                let params: CompareFormatsParams = parse_params(args)?;
                Ok(Self::execute(&params, &fetcher).await)
            }
            .boxed()
        })
    }
}
