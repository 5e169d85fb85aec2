//! Saiyan profile tool.
//!
//! Looks a character up by name and returns its power score together with
//! a short fighting-style analysis.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::common::{error_result, parse_params, structured_result, validate_query};
use crate::domains::roster::{
    Character, PowerScore, RosterFetcher, find_character, power_score,
};
use crate::domains::tools::ToolError;

const ADAPTABLE_MIN_TRANSFORMATIONS: usize = 3;

const STRENGTHS: &[&str] = &["resistencia", "potencial de crecimiento"];
const WEAKNESSES: &[&str] = &["desgaste energético en transformaciones largas"];

/// Parameters for the profile tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SaiyanProfileParams {
    /// Name (or part of the name) of the Saiyan, at least 2 characters.
    #[schemars(length(min = 2))]
    pub name: String,
}

/// Fighting style analysis.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct FightingStyle {
    pub hints: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Structured output of the profile tool.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaiyanProfile {
    pub id: i64,
    pub name: Option<String>,
    pub power_score: PowerScore,
    pub race: Option<String>,
    pub affiliation: Option<String>,
    pub transformations: Vec<String>,
    pub style: FightingStyle,
    pub image: Option<String>,
}

impl SaiyanProfile {
    /// Build the profile of a character.
    pub fn of(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            power_score: power_score(character),
            race: character.race.clone(),
            affiliation: character.affiliation.clone(),
            transformations: character.transformation_names(),
            style: FightingStyle {
                hints: style_hints(character),
                strengths: STRENGTHS.iter().map(|s| s.to_string()).collect(),
                weaknesses: WEAKNESSES.iter().map(|s| s.to_string()).collect(),
            },
            image: character.image.clone(),
        }
    }
}

fn style_hints(character: &Character) -> Vec<String> {
    let description = character
        .description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    let mut hints = Vec::new();
    if character.transformations.len() >= ADAPTABLE_MIN_TRANSFORMATIONS {
        hints.push("alta adaptabilidad".to_string());
    }
    if description.contains("calm") {
        hints.push("mente fría".to_string());
    }
    if description.contains("pride") {
        hints.push("orgullo guerrero".to_string());
    }
    hints
}

/// Saiyan profile tool.
pub struct SaiyanProfileTool;

impl SaiyanProfileTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "saiyan_profile";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Return an analytical profile (power score, style hints, strengths and weaknesses) of a Z fighter Saiyan. Matches the exact name first, then any name containing the query.";

    /// Fetch the roster and profile the requested character.
    pub async fn run(
        params: &SaiyanProfileParams,
        fetcher: &RosterFetcher,
    ) -> Result<SaiyanProfile, ToolError> {
        validate_query("name", &params.name)?;

        let roster = fetcher.fetch_roster().await?;
        let character =
            find_character(&roster, &params.name).ok_or_else(|| ToolError::not_found(&params.name))?;

        Ok(SaiyanProfile::of(character))
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn execute(params: &SaiyanProfileParams, fetcher: &RosterFetcher) -> CallToolResult {
        info!("Profiling Saiyan");

        Self::run(params, fetcher)
            .await
            .and_then(|profile| structured_result(&profile))
            .unwrap_or_else(|e| error_result(&e))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SaiyanProfileParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<SaiyanProfile>()),
            icons: None,
            meta: None,
            title: Some("Saiyan Profile".into()),
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
                let params: SaiyanProfileParams = parse_params(args)?;
                Ok(Self::execute(&params, &fetcher).await)
            }
            .boxed()
        })
    }
}
