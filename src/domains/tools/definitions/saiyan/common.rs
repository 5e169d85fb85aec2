//! Helpers shared by the Saiyan tools: argument parsing, validation and
//! result formatting.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::domains::tools::ToolError;

/// Shortest accepted character name query.
pub const MIN_QUERY_LEN: usize = 2;

/// Deserialize tool arguments, rejecting malformed ones as invalid params.
pub fn parse_params<T: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<T, McpError> {
    serde_json::from_value(serde_json::Value::Object(arguments.unwrap_or_default()))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Check that a name query is at least [`MIN_QUERY_LEN`] characters long.
pub fn validate_query(field: &str, value: &str) -> Result<(), ToolError> {
    if value.chars().count() < MIN_QUERY_LEN {
        return Err(ToolError::invalid_arguments(format!(
            "'{}' must be at least {} characters long",
            field, MIN_QUERY_LEN
        )));
    }
    Ok(())
}

/// Render a tool failure as an error-flagged result.
pub fn error_result(error: &ToolError) -> CallToolResult {
    let message = error.to_string();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// A result carrying `data` both as pretty JSON text and as structured content.
pub fn structured_result<T: Serialize>(data: &T) -> Result<CallToolResult, ToolError> {
    let value = serde_json::to_value(data)?;
    let text = serde_json::to_string_pretty(&value)?;

    let mut result = CallToolResult::success(vec![Content::text(text)]);
    result.structured_content = Some(value);
    Ok(result)
}

#[cfg(test)]
pub(crate) mod test_support {
    use rmcp::model::{CallToolResult, RawContent};

    /// All text blocks of a tool result.
    pub fn texts(result: &CallToolResult) -> Vec<String> {
        result
            .content
            .iter()
            .filter_map(|c| match &c.raw {
                RawContent::Text(text) => Some(text.text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn is_error(result: &CallToolResult) -> bool {
        result.is_error.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, serde::Deserialize)]
    struct Params {
        name: String,
    }

    #[test]
    fn test_parse_params() {
        let args = json!({ "name": "Goku" }).as_object().cloned();
        let params: Params = parse_params(args).unwrap();
        assert_eq!(params.name, "Goku");
    }

    #[test]
    fn test_parse_params_missing_field() {
        assert!(parse_params::<Params>(None).is_err());
    }

    #[test]
    fn test_validate_query() {
        assert!(validate_query("name", "Go").is_ok());
        assert!(validate_query("name", "G").is_err());
        assert!(validate_query("name", "").is_err());
    }

    #[test]
    fn test_structured_result_carries_both_forms() {
        let result = structured_result(&json!({ "items": [] })).unwrap();
        assert_eq!(result.structured_content, Some(json!({ "items": [] })));
        assert!(test_support::texts(&result)[0].contains("\"items\""));
        assert!(!test_support::is_error(&result));
    }

    #[test]
    fn test_error_result_is_flagged() {
        let result = error_result(&ToolError::not_found("Freezer"));
        assert!(test_support::is_error(&result));
        assert!(test_support::texts(&result)[0].contains("Freezer"));
    }
}
