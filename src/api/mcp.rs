// MCP-style JSON-RPC endpoint exposing the cocktail tools
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::api::handlers::AppState;
use crate::error::Error;
use crate::jsonrpc::{
    JsonRpcRequest, JsonRpcResponse, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST,
    JSONRPC_VERSION, METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::tools::{definitions, tool_definitions, ToolService};

pub const PROTOCOL_VERSION: &str = "2025-03-26";

#[derive(Debug, Deserialize)]
struct ToolCallParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

/// POST /mcp - JSON-RPC entry point
pub async fn handle_mcp(State(state): State<AppState>, body: String) -> Response {
    let value: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Rejected unparseable JSON-RPC body: {}", e);
            return Json(JsonRpcResponse::error(
                None,
                PARSE_ERROR,
                format!("Parse error: {e}"),
            ))
            .into_response();
        }
    };

    let request: JsonRpcRequest = match serde_json::from_value(value) {
        Ok(request) => request,
        Err(e) => {
            return Json(JsonRpcResponse::error(
                None,
                INVALID_REQUEST,
                format!("Invalid request: {e}"),
            ))
            .into_response();
        }
    };

    if request.is_notification() {
        debug!("Notification received: {}", request.method);
        return StatusCode::ACCEPTED.into_response();
    }

    Json(handle_request(&state.tools, request)).into_response()
}

/// Dispatch one JSON-RPC request to the matching method
pub fn handle_request(tools: &ToolService, request: JsonRpcRequest) -> JsonRpcResponse {
    let id = request.id.clone();

    if request.jsonrpc != JSONRPC_VERSION {
        return JsonRpcResponse::error(id, INVALID_REQUEST, "jsonrpc must be \"2.0\"");
    }

    debug!("JSON-RPC method: {}", request.method);

    match request.method.as_str() {
        "initialize" => JsonRpcResponse::success(id, initialize_result()),
        "ping" => JsonRpcResponse::success(id, json!({})),
        "tools/list" => JsonRpcResponse::success(id, json!({ "tools": tool_definitions() })),
        "tools/call" => call_tool(tools, id, request.params),
        other => JsonRpcResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {other}")),
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": definitions::SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "instructions": definitions::SERVER_INSTRUCTIONS,
    })
}

fn call_tool(tools: &ToolService, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
    let params: ToolCallParams = match params.map(serde_json::from_value::<ToolCallParams>).transpose() {
        Ok(Some(params)) => params,
        Ok(None) => return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing params"),
        Err(e) => {
            return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {e}"))
        }
    };

    let arguments = params.arguments.unwrap_or_else(|| json!({}));

    match tools.call(&params.name, arguments) {
        // A tool-level "error" envelope is a normal result for the assistant to read
        Ok(envelope) => {
            let text = match serde_json::to_string(&envelope) {
                Ok(text) => text,
                Err(e) => {
                    return JsonRpcResponse::error(id, INTERNAL_ERROR, e.to_string());
                }
            };
            JsonRpcResponse::success(
                id,
                json!({
                    "content": [{ "type": "text", "text": text }],
                    "structuredContent": envelope,
                    "isError": false,
                }),
            )
        }
        Err(e @ (Error::Validation(_) | Error::NotFound(_))) => {
            JsonRpcResponse::error(id, INVALID_PARAMS, e.to_string())
        }
        Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, e.log_safe()),
    }
}
