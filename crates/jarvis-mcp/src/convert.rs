//! Conversions between jarvis tool types and rmcp protocol types.

use std::sync::Arc;

use jarvis_tools::{ToolDefinition, ToolError, ToolOutput};
use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde_json::Value;

/// Build an rmcp `Tool` from a transport-neutral definition.
pub(crate) fn tool_from_definition(def: ToolDefinition) -> Tool {
    let schema: JsonObject = match def.input_schema {
        Value::Object(map) => map,
        // Schemas are always objects; fall back to an empty object schema.
        _ => {
            let mut map = JsonObject::new();
            map.insert("type".to_string(), Value::String("object".to_string()));
            map
        },
    };
    Tool::new(def.name, def.description, Arc::new(schema))
}

/// Flatten protocol arguments into the JSON object the tools expect.
pub(crate) fn arguments_to_value(arguments: Option<JsonObject>) -> Value {
    Value::Object(arguments.unwrap_or_default())
}

/// Map a tool's text output onto a call result. A failure payload keeps its
/// text and is flagged with `isError`.
pub(crate) fn output_to_result(output: ToolOutput) -> CallToolResult {
    let content = vec![Content::text(output.text)];
    if output.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

/// Map a rejected request onto a JSON-RPC error.
pub(crate) fn error_to_error_data(error: &ToolError) -> ErrorData {
    if error.is_caller_error() {
        ErrorData::invalid_params(error.to_string(), None)
    } else {
        ErrorData::internal_error(error.to_string(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jarvis_tools::ExecutorError;
    use rmcp::model::{ErrorCode, RawContent};
    use std::path::PathBuf;

    fn text_of(result: &CallToolResult) -> String {
        match &*result.content[0] {
            RawContent::Text(t) => t.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_tool_from_definition() {
        let tool = tool_from_definition(ToolDefinition {
            name: "read_file".to_string(),
            description: "Read a file".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {"path": {"type": "string"}},
                "required": ["path"]
            }),
        });

        assert_eq!(tool.name.as_ref(), "read_file");
        assert_eq!(tool.description.as_deref(), Some("Read a file"));
        assert_eq!(tool.input_schema["required"][0], "path");
    }

    #[test]
    fn test_non_object_schema_falls_back() {
        let tool = tool_from_definition(ToolDefinition {
            name: "odd".to_string(),
            description: String::new(),
            input_schema: serde_json::json!(["not", "an", "object"]),
        });
        assert_eq!(tool.input_schema["type"], "object");
    }

    #[test]
    fn test_arguments_to_value() {
        assert_eq!(arguments_to_value(None), serde_json::json!({}));

        let mut args = JsonObject::new();
        args.insert("command".to_string(), Value::String("ls".to_string()));
        assert_eq!(arguments_to_value(Some(args)), serde_json::json!({"command": "ls"}));
    }

    #[test]
    fn test_output_to_result() {
        let ok = output_to_result(ToolOutput::text("done"));
        assert_eq!(ok.is_error, Some(false));
        assert_eq!(text_of(&ok), "done");

        let failed = output_to_result(ToolOutput::failure("Command failed: false"));
        assert_eq!(failed.is_error, Some(true));
        assert_eq!(text_of(&failed), "Command failed: false");
    }

    #[test]
    fn test_error_codes() {
        let caller = error_to_error_data(&ToolError::WorkingDirectory(
            ExecutorError::WorkingDirectoryNotFound {
                path: PathBuf::from("/nope"),
            },
        ));
        assert_eq!(caller.code, ErrorCode::INVALID_PARAMS);
        assert!(caller.message.contains("Path '/nope' does not exist"));

        let host = error_to_error_data(&ToolError::ExecutionFailed("boom".to_string()));
        assert_eq!(host.code, ErrorCode::INTERNAL_ERROR);
    }
}
