//! The Aceternity UI component-library provider.
//!
//! Four `aceternity_*` tools over the static Aceternity catalog, plus the
//! `aceternity://` resource scheme. Every catalog entry carries usage
//! context, surfaced through the context tool and appended to resource
//! bodies.

use serde_json::Value;

use crate::catalog::{Catalog, ACETERNITY_COMPONENTS};
use crate::mcp::protocol::{
    ResourceContents, ResourceDefinition, ToolCallResult, ToolDefinition,
};
use crate::providers::library::{
    component_resources, context_payload, context_text, list_payload, search_payload,
    strip_scheme,
};
use crate::providers::{optional_str, required_str, Provider, ProviderId};

/// Aceternity UI component catalog.
pub struct AceternityProvider {
    catalog: Catalog,
}

impl AceternityProvider {
    /// Wraps the static Aceternity catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            catalog: Catalog::new(ACETERNITY_COMPONENTS),
        }
    }
}

impl Default for AceternityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for AceternityProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Aceternity
    }

    fn tools(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: "aceternity_get_component".to_string(),
                description: Some(
                    "Get an Aceternity UI component by name (e.g., '3d-card-effect', \
                     'background-beams')"
                        .to_string(),
                ),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "componentName": {
                            "type": "string",
                            "description": "Name of the Aceternity UI component to retrieve",
                        },
                    },
                    "required": ["componentName"],
                }),
            },
            ToolDefinition {
                name: "aceternity_list_components".to_string(),
                description: Some("List all available Aceternity UI components".to_string()),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Optional category filter",
                        },
                    },
                }),
            },
            ToolDefinition {
                name: "aceternity_search_components".to_string(),
                description: Some(
                    "Search Aceternity UI components by keyword, including usage context"
                        .to_string(),
                ),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Search query to find components",
                        },
                    },
                    "required": ["query"],
                }),
            },
            ToolDefinition {
                name: "aceternity_get_component_context".to_string(),
                description: Some(
                    "Get usage context for an Aceternity UI component: use cases, when to \
                     use it, and related components"
                        .to_string(),
                ),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "componentName": {
                            "type": "string",
                            "description": "Name of the Aceternity UI component",
                        },
                    },
                    "required": ["componentName"],
                }),
            },
        ]
    }

    fn resources(&self) -> Vec<ResourceDefinition> {
        component_resources(&self.catalog, "aceternity")
    }

    fn call_tool(&self, name: &str, args: &Value) -> ToolCallResult {
        match name {
            "aceternity_get_component" => match required_str(args, "componentName") {
                Ok(component) => ToolCallResult::text(format!(
                    "// Aceternity UI Component: {component}\n\
                     // This component is available from Aceternity UI\n\
                     // Visit https://ui.aceternity.com/components/{component} for \
                     documentation\n\n\
                     // Premium animated Tailwind component"
                )),
                Err(err) => ToolCallResult::error(err.to_string()),
            },
            "aceternity_list_components" => {
                let category = optional_str(args, "category");
                ToolCallResult::json(&list_payload(&self.catalog, category))
            }
            "aceternity_search_components" => {
                let query = optional_str(args, "query").unwrap_or_default();
                ToolCallResult::json(&search_payload(&self.catalog, query))
            }
            "aceternity_get_component_context" => match required_str(args, "componentName") {
                Ok(component) => match context_payload(&self.catalog, component) {
                    Ok(payload) => ToolCallResult::json(&payload),
                    Err(message) => ToolCallResult::error(message),
                },
                Err(err) => ToolCallResult::error(err.to_string()),
            },
            other => ToolCallResult::error(format!("Unknown Aceternity UI tool: {other}")),
        }
    }

    fn read_resource(&self, uri: &str) -> Option<ResourceContents> {
        let name = strip_scheme(uri, "aceternity")?;
        let context = self
            .catalog
            .get(name)
            .map(context_text)
            .unwrap_or_default();

        Some(ResourceContents {
            uri: uri.to_string(),
            mime_type: "text/plain".to_string(),
            text: format!(
                "// Aceternity UI Component: {name}\n\
                 // Documentation: https://ui.aceternity.com/components/{name}\n\
                 // Premium animated Tailwind component{context}"
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::protocol::ToolContent;
    use serde_json::json;

    fn payload(result: &ToolCallResult) -> Value {
        let ToolContent::Text { text } = &result.content[0];
        serde_json::from_str(text).expect("tool output is JSON")
    }

    #[test]
    fn context_tool_returns_guidance() {
        let provider = AceternityProvider::new();
        let result = provider.call_tool(
            "aceternity_get_component_context",
            &json!({"componentName": "3d-card-effect"}),
        );
        assert!(!result.is_error);
        let body = payload(&result);
        assert_eq!(body["name"], "3d-card-effect");
        assert!(body["whenToUse"].as_array().is_some_and(|v| !v.is_empty()));
    }

    #[test]
    fn context_tool_reports_unknown_component() {
        let provider = AceternityProvider::new();
        let result = provider.call_tool(
            "aceternity_get_component_context",
            &json!({"componentName": "time-machine"}),
        );
        assert!(result.is_error);
    }

    #[test]
    fn search_reaches_context_fields() {
        let provider = AceternityProvider::new();
        let body = payload(
            &provider.call_tool("aceternity_search_components", &json!({"query": "hero"})),
        );
        assert!(body["count"].as_u64().unwrap() >= 1);
    }

    #[test]
    fn resource_body_appends_context() {
        let provider = AceternityProvider::new();
        let contents = provider
            .read_resource("aceternity://3d-card-effect")
            .unwrap();
        assert!(contents.text.contains("// Use Cases:"));
        assert!(contents.text.contains("// Related Components:"));
    }
}
