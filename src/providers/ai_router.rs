//! The AI workflow-router provider.
//!
//! Enforces the decoupled AI architecture: all AI operations route through
//! external n8n webhooks, never directly to LLM APIs. The four `ai_*`
//! tools validate their arguments and acknowledge the routing; the actual
//! webhook POST happens downstream.

use serde_json::{json, Value};

use crate::mcp::protocol::{
    ResourceContents, ResourceDefinition, ToolCallResult, ToolDefinition,
};
use crate::providers::{required_str, Provider, ProviderId};

/// AI workflow router.
pub struct AiRouterProvider {
    webhook_url: Option<String>,
}

impl AiRouterProvider {
    /// Creates the router, optionally bound to a configured webhook base
    /// URL.
    #[must_use]
    pub const fn new(webhook_url: Option<String>) -> Self {
        Self { webhook_url }
    }

    fn endpoint_note(&self) -> String {
        self.webhook_url.as_ref().map_or_else(
            || "No webhook endpoint configured; request was validated but not delivered.".to_string(),
            |url| format!("Configured webhook endpoint: {url}"),
        )
    }
}

impl Provider for AiRouterProvider {
    fn id(&self) -> ProviderId {
        ProviderId::AiRouter
    }

    fn tools(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: "ai_call".to_string(),
                description: Some(
                    "Call an n8n workflow for AI operations. This proxies AI requests to \
                     n8n webhooks - AI logic is handled downstream in n8n, NOT in this \
                     server."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "workflow": {
                            "type": "string",
                            "description": "n8n workflow identifier or webhook URL",
                        },
                        "payload": {
                            "type": "object",
                            "description": "Payload to send to n8n workflow",
                        },
                    },
                    "required": ["workflow", "payload"],
                }),
            },
            ToolDefinition {
                name: "ai_summarize".to_string(),
                description: Some(
                    "Summarize text via n8n workflow. POSTs to n8n webhook - AI logic \
                     handled in n8n."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "text": {
                            "type": "string",
                            "description": "Text to summarize",
                        },
                        "maxLength": {
                            "type": "number",
                            "description": "Maximum length of summary",
                        },
                    },
                    "required": ["text"],
                }),
            },
            ToolDefinition {
                name: "ai_extract".to_string(),
                description: Some(
                    "Extract structured data from text via n8n workflow. POSTs to n8n \
                     webhook - AI logic handled in n8n."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "text": {
                            "type": "string",
                            "description": "Text to extract data from",
                        },
                        "schema": {
                            "type": "object",
                            "description": "JSON schema defining what to extract",
                        },
                    },
                    "required": ["text", "schema"],
                }),
            },
            ToolDefinition {
                name: "ai_generate".to_string(),
                description: Some(
                    "Generate content via n8n workflow. POSTs to n8n webhook - AI logic \
                     handled in n8n."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "prompt": {
                            "type": "string",
                            "description": "Prompt for content generation",
                        },
                        "context": {
                            "type": "object",
                            "description": "Additional context for generation",
                        },
                    },
                    "required": ["prompt"],
                }),
            },
        ]
    }

    fn resources(&self) -> Vec<ResourceDefinition> {
        vec![
            ResourceDefinition {
                uri: "ai://workflows".to_string(),
                name: "Available n8n Workflows".to_string(),
                description: Some(
                    "List of available n8n workflows for AI operations".to_string(),
                ),
                mime_type: "application/json".to_string(),
            },
            ResourceDefinition {
                uri: "ai://architecture".to_string(),
                name: "AI Architecture Documentation".to_string(),
                description: Some(
                    "Documentation on decoupled AI architecture via n8n".to_string(),
                ),
                mime_type: "text/plain".to_string(),
            },
        ]
    }

    fn call_tool(&self, name: &str, args: &Value) -> ToolCallResult {
        match name {
            "ai_call" => {
                let workflow = match required_str(args, "workflow") {
                    Ok(workflow) => workflow,
                    Err(err) => return ToolCallResult::error(err.to_string()),
                };
                let Some(payload) = args.get("payload").filter(|p| p.is_object()) else {
                    return ToolCallResult::error("missing required parameter: payload");
                };

                tracing::info!(workflow, "routing AI call to n8n");
                ToolCallResult::text(format!(
                    "AI call routed to n8n workflow: {workflow}\n\
                     Payload: {}\n\n{}",
                    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string()),
                    self.endpoint_note()
                ))
            }
            "ai_summarize" => {
                let text = match required_str(args, "text") {
                    Ok(text) => text,
                    Err(err) => return ToolCallResult::error(err.to_string()),
                };
                let max_length = args
                    .get("maxLength")
                    .and_then(Value::as_u64)
                    .map_or_else(|| "not specified".to_string(), |n| n.to_string());

                ToolCallResult::text(format!(
                    "Summarize request routed to n8n.\n\
                     Text length: {} characters\n\
                     Max length: {max_length}\n\n{}",
                    text.chars().count(),
                    self.endpoint_note()
                ))
            }
            "ai_extract" => {
                if let Err(err) = required_str(args, "text") {
                    return ToolCallResult::error(err.to_string());
                }
                let Some(schema) = args.get("schema").filter(|s| s.is_object()) else {
                    return ToolCallResult::error("missing required parameter: schema");
                };

                ToolCallResult::text(format!(
                    "Extract request routed to n8n.\n\
                     Schema: {}\n\n{}",
                    serde_json::to_string_pretty(schema).unwrap_or_else(|_| schema.to_string()),
                    self.endpoint_note()
                ))
            }
            "ai_generate" => {
                let prompt = match required_str(args, "prompt") {
                    Ok(prompt) => prompt,
                    Err(err) => return ToolCallResult::error(err.to_string()),
                };
                let context = args.get("context").map_or_else(
                    || "none".to_string(),
                    |c| serde_json::to_string_pretty(c).unwrap_or_else(|_| c.to_string()),
                );

                ToolCallResult::text(format!(
                    "Generate request routed to n8n.\n\
                     Prompt: {prompt}\n\
                     Context: {context}\n\n{}",
                    self.endpoint_note()
                ))
            }
            other => ToolCallResult::error(format!("Unknown AI Router tool: {other}")),
        }
    }

    fn read_resource(&self, uri: &str) -> Option<ResourceContents> {
        let name = uri.strip_prefix("ai://")?;

        match name {
            "workflows" => {
                let workflows = json!({
                    "workflows": [
                        {"id": "summarize", "description": "Text summarization workflow"},
                        {"id": "extract", "description": "Data extraction workflow"},
                        {"id": "generate", "description": "Content generation workflow"},
                    ],
                });
                Some(ResourceContents {
                    uri: uri.to_string(),
                    mime_type: "application/json".to_string(),
                    text: serde_json::to_string_pretty(&workflows)
                        .unwrap_or_else(|_| workflows.to_string()),
                })
            }
            "architecture" => Some(ResourceContents {
                uri: uri.to_string(),
                mime_type: "text/plain".to_string(),
                text: "DECOUPLED AI ARCHITECTURE\n\n\
                       All AI operations route through n8n webhooks:\n\
                       Frontend -> Edge Function -> n8n Webhook -> LLM + Tools -> Return\n\n\
                       All AI logic is handled downstream in n8n workflows.\n\
                       This provider only proxies requests to n8n; it does NOT call LLM \
                       APIs directly."
                    .to_string(),
            }),
            _ => None,
        }
    }
}
