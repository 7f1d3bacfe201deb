//! MCP server for the design-system catalog.
//!
//! Implements the MCP server lifecycle:
//!
//! 1. **Initialisation**: Capability negotiation and version agreement
//! 2. **Operation**: Handling tool calls and resource reads
//! 3. **Shutdown**: Graceful connection termination
//!
//! # Architecture
//!
//! The server itself is a thin JSON-RPC shell. All tool and resource
//! semantics live in the provider registry; the server's job is lifecycle
//! state, parameter decoding, and keeping tool-level failures from
//! becoming protocol errors.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::mcp::protocol::{
    ErrorCode, IncomingMessage, JsonRpcError, JsonRpcErrorData, JsonRpcNotification,
    JsonRpcRequest, JsonRpcResponse, ReadResourceParams, RequestId, ToolCallParams,
    MCP_PROTOCOL_VERSION, SERVER_NAME,
};
use crate::mcp::transport::StdioTransport;
use crate::providers::ProviderRegistry;

/// Server state in the MCP lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for initialize request.
    AwaitingInit,
    /// Initialize received, waiting for initialized notification.
    Initialising,
    /// Ready for normal operation.
    Running,
    /// Shutdown in progress.
    ShuttingDown,
}

/// Server capabilities advertised during initialisation.
#[derive(Debug, Clone, Serialize)]
pub struct ServerCapabilities {
    /// Tool-related capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolCapabilities>,
    /// Resource-related capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceCapabilities>,
}

impl Default for ServerCapabilities {
    fn default() -> Self {
        Self {
            tools: Some(ToolCapabilities::default()),
            resources: Some(ResourceCapabilities::default()),
        }
    }
}

/// Tool-specific capabilities.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolCapabilities {
    /// Whether the tool list can change during the session.
    #[serde(rename = "listChanged", skip_serializing_if = "is_false")]
    pub list_changed: bool,
}

/// Resource-specific capabilities.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourceCapabilities {
    /// Whether clients can subscribe to resource updates.
    #[serde(skip_serializing_if = "is_false")]
    pub subscribe: bool,
    /// Whether the resource list can change during the session.
    #[serde(rename = "listChanged", skip_serializing_if = "is_false")]
    pub list_changed: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if requires a predicate fn(&T) -> bool, so we must take &bool here
const fn is_false(b: &bool) -> bool {
    !*b
}

/// Server information for initialisation response.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Client information received during initialisation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    /// Client name.
    pub name: String,
    /// Client version.
    #[serde(default)]
    pub version: Option<String>,
}

/// Parameters for the initialize request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Protocol version requested by client.
    pub protocol_version: String,
    /// Client capabilities.
    #[serde(default)]
    pub capabilities: Value,
    /// Client information.
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
}

/// The MCP server for the design-system catalog.
pub struct McpServer {
    /// Current server state.
    state: ServerState,
    /// The transport layer.
    transport: StdioTransport,
    /// Negotiated protocol version (set after initialisation).
    protocol_version: Option<String>,
    /// The provider registry behind the MCP surface.
    registry: ProviderRegistry,
}

impl McpServer {
    /// Creates a new MCP server over the given provider registry.
    #[must_use]
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            state: ServerState::AwaitingInit,
            transport: StdioTransport::new(),
            protocol_version: None,
            registry,
        }
    }

    /// Returns the current server state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Runs the MCP server main loop with graceful shutdown handling.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn run(&mut self) -> std::io::Result<()> {
        self.run_with_shutdown().await
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(unix)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).map_err(std::io::Error::other)?;
        let mut sigterm = signal(SignalKind::terminate()).map_err(std::io::Error::other)?;

        loop {
            tokio::select! {
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(windows)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    tracing::info!("Received Ctrl+C, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Handles the result from transport read.
    ///
    /// Returns `true` if the server should shut down.
    async fn handle_transport_result(
        &mut self,
        line_result: std::io::Result<Option<String>>,
    ) -> std::io::Result<bool> {
        let Some(line) = line_result? else {
            self.state = ServerState::ShuttingDown;
            return Ok(true);
        };

        if line.trim().is_empty() {
            return Ok(false);
        }

        self.handle_line(&line).await?;

        if self.state == ServerState::ShuttingDown {
            return Ok(true);
        }

        Ok(false)
    }

    /// Handles a single line of input.
    async fn handle_line(&mut self, line: &str) -> std::io::Result<()> {
        use crate::mcp::protocol::parse_message;

        match parse_message(line) {
            Ok(msg) => self.handle_message(msg).await,
            Err(error) => {
                self.transport.write_error(&error).await?;
                Ok(())
            }
        }
    }

    /// Handles a parsed incoming message.
    async fn handle_message(&mut self, msg: IncomingMessage) -> std::io::Result<()> {
        match msg {
            IncomingMessage::Request(req) => self.handle_request(req).await,
            IncomingMessage::Notification(ref notif) => {
                self.handle_notification(notif);
                Ok(())
            }
        }
    }

    /// Handles an incoming request.
    async fn handle_request(&mut self, req: JsonRpcRequest) -> std::io::Result<()> {
        let response = match req.method.as_str() {
            "initialize" => self.handle_initialize(&req),
            "tools/list" => self.handle_tools_list(&req),
            "tools/call" => self.handle_tools_call(&req),
            "resources/list" => self.handle_resources_list(&req),
            "resources/read" => self.handle_resources_read(&req),
            "ping" => Ok(Self::handle_ping(&req)),
            _ => Err(JsonRpcError::method_not_found(req.id.clone(), &req.method)),
        };

        match response {
            Ok(resp) => self.transport.write_response(&resp).await,
            Err(error) => self.transport.write_error(&error).await,
        }
    }

    /// Handles an incoming notification.
    fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        if notif.method == "notifications/initialized" && self.state == ServerState::Initialising {
            self.state = ServerState::Running;
            tracing::info!(
                providers = self.registry.provider_count(),
                tools = self.registry.tool_count(),
                "server running"
            );
        }
    }

    /// Handles the initialize request.
    fn handle_initialize(&mut self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        if self.state != ServerState::AwaitingInit {
            return Err(JsonRpcError::new(
                Some(req.id.clone()),
                JsonRpcErrorData::with_message(
                    ErrorCode::InvalidRequest,
                    "Server already initialised",
                ),
            ));
        }

        let params: InitializeParams = Self::decode_params(req, "initialize")?;
        if let Some(client) = &params.client_info {
            tracing::info!(
                client = client.name.as_str(),
                version = client.version.as_deref().unwrap_or("unknown"),
                requested = params.protocol_version.as_str(),
                "initialize received"
            );
        }

        let negotiated_version = MCP_PROTOCOL_VERSION.to_string();

        self.protocol_version = Some(negotiated_version.clone());
        self.state = ServerState::Initialising;

        let result = json!({
            "protocolVersion": negotiated_version,
            "capabilities": ServerCapabilities::default(),
            "serverInfo": ServerInfo::default(),
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/list request.
    fn handle_tools_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let result = json!({
            "tools": self.registry.list_tools(),
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/call request.
    ///
    /// Tool failures are returned as `isError` results; only malformed
    /// params or serialisation faults become protocol errors.
    fn handle_tools_call(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let params: ToolCallParams = Self::decode_params(req, "tool call")?;

        let result = self.registry.call_tool(&params.name, &params.arguments);

        let result_value = serde_json::to_value(&result).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialise tool call result");
            JsonRpcError::new(
                Some(req.id.clone()),
                JsonRpcErrorData::with_message(
                    ErrorCode::InternalError,
                    "Internal error: failed to serialise result",
                ),
            )
        })?;

        Ok(JsonRpcResponse::success(req.id.clone(), result_value))
    }

    /// Handles the resources/list request.
    fn handle_resources_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let result = json!({
            "resources": self.registry.list_resources(),
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the resources/read request.
    fn handle_resources_read(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let params: ReadResourceParams = Self::decode_params(req, "resource read")?;

        let contents = self.registry.read_resource(&params.uri).ok_or_else(|| {
            JsonRpcError::invalid_params(
                req.id.clone(),
                format!("Unknown resource: {}", params.uri),
            )
        })?;

        let result = json!({
            "contents": [contents],
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the ping request.
    fn handle_ping(req: &JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::success(req.id.clone(), json!({}))
    }

    /// Ensures the server is in the Running state.
    fn require_running(&self, id: &RequestId) -> Result<(), JsonRpcError> {
        if self.state != ServerState::Running {
            return Err(JsonRpcError::new(
                Some(id.clone()),
                JsonRpcErrorData::with_message(ErrorCode::InvalidRequest, "Server not initialised"),
            ));
        }
        Ok(())
    }

    /// Decodes required request params into a concrete type.
    fn decode_params<T: serde::de::DeserializeOwned>(
        req: &JsonRpcRequest,
        what: &str,
    ) -> Result<T, JsonRpcError> {
        req.params
            .as_ref()
            .map(|p| serde_json::from_value(p.clone()))
            .transpose()
            .map_err(|e| {
                JsonRpcError::invalid_params(req.id.clone(), format!("Invalid {what} params: {e}"))
            })?
            .ok_or_else(|| {
                JsonRpcError::invalid_params(req.id.clone(), format!("Missing {what} params"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenStore;
    use std::sync::Arc;

    fn server() -> McpServer {
        let store = Arc::new(TokenStore::embedded("default").expect("embedded data parses"));
        McpServer::new(ProviderRegistry::with_default_providers(store, None))
    }

    fn request(method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: RequestId::Number(1),
            method: method.to_string(),
            params: Some(params),
        }
    }

    fn initialize(server: &mut McpServer) {
        let req = request(
            "initialize",
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "test-client", "version": "1.0"},
            }),
        );
        server.handle_initialize(&req).expect("initialize succeeds");
        server.handle_notification(&JsonRpcNotification {
            jsonrpc: "2.0".to_string(),
            method: "notifications/initialized".to_string(),
            params: None,
        });
    }

    #[test]
    fn lifecycle_reaches_running() {
        let mut server = server();
        assert_eq!(server.state(), ServerState::AwaitingInit);
        initialize(&mut server);
        assert_eq!(server.state(), ServerState::Running);
    }

    #[test]
    fn initialize_advertises_tools_and_resources() {
        let mut server = server();
        let req = request(
            "initialize",
            json!({"protocolVersion": "2024-11-05", "capabilities": {}}),
        );
        let response = server.handle_initialize(&req).unwrap();
        assert_eq!(response.result["protocolVersion"], MCP_PROTOCOL_VERSION);
        assert!(response.result["capabilities"]["tools"].is_object());
        assert!(response.result["capabilities"]["resources"].is_object());
        assert_eq!(response.result["serverInfo"]["name"], SERVER_NAME);
    }

    #[test]
    fn double_initialize_is_rejected() {
        let mut server = server();
        initialize(&mut server);
        let req = request(
            "initialize",
            json!({"protocolVersion": "2024-11-05", "capabilities": {}}),
        );
        let err = server.handle_initialize(&req).unwrap_err();
        assert_eq!(err.error.code, ErrorCode::InvalidRequest.code());
    }

    #[test]
    fn requests_before_init_are_rejected() {
        let server = server();
        let err = server
            .handle_tools_list(&request("tools/list", json!({})))
            .unwrap_err();
        assert_eq!(err.error.code, ErrorCode::InvalidRequest.code());
    }

    #[test]
    fn tools_list_merges_all_providers() {
        let mut server = server();
        initialize(&mut server);
        let response = server
            .handle_tools_list(&request("tools/list", json!({})))
            .unwrap();
        let tools = response.result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 33);
        assert!(tools.iter().any(|t| t["name"] == "brand_get_color"));
        assert!(tools.iter().any(|t| t["name"] == "ai_generate"));
    }

    #[test]
    fn failed_tool_call_is_a_result_not_a_protocol_error() {
        let mut server = server();
        initialize(&mut server);
        let response = server
            .handle_tools_call(&request(
                "tools/call",
                json!({"name": "brand_get_color", "arguments": {"colorName": "nope"}}),
            ))
            .unwrap();
        assert_eq!(response.result["isError"], true);

        // The next call on the same server still works.
        let ok = server
            .handle_tools_call(&request(
                "tools/call",
                json!({"name": "brand_get_color", "arguments": {"colorName": "success"}}),
            ))
            .unwrap();
        assert!(ok.result.get("isError").is_none());
    }

    #[test]
    fn tools_call_without_params_is_invalid() {
        let mut server = server();
        initialize(&mut server);
        let req = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: RequestId::Number(9),
            method: "tools/call".to_string(),
            params: None,
        };
        let err = server.handle_tools_call(&req).unwrap_err();
        assert_eq!(err.error.code, ErrorCode::InvalidParams.code());
    }

    #[test]
    fn resources_read_round_trip() {
        let mut server = server();
        initialize(&mut server);
        let response = server
            .handle_resources_read(&request(
                "resources/read",
                json!({"uri": "brand://colors"}),
            ))
            .unwrap();
        let contents = &response.result["contents"][0];
        assert_eq!(contents["uri"], "brand://colors");
        assert_eq!(contents["mimeType"], "application/json");
    }

    #[test]
    fn unknown_resource_is_invalid_params() {
        let mut server = server();
        initialize(&mut server);
        let err = server
            .handle_resources_read(&request(
                "resources/read",
                json!({"uri": "brand://gradients"}),
            ))
            .unwrap_err();
        assert_eq!(err.error.code, ErrorCode::InvalidParams.code());
    }

    #[test]
    fn ping_works_in_any_state() {
        let response = McpServer::handle_ping(&request("ping", json!({})));
        assert_eq!(response.result, json!({}));
    }
}
