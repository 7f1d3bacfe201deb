//! The 8bitcn retro component-library provider.
//!
//! Four `eightbit_*` tools over the static 8bitcn catalog, plus the
//! `8bit://` resource scheme. List responses advertise the library's
//! style domain and preferred theme so clients can pair components with
//! the matching token theme.

use serde_json::Value;

use crate::catalog::{Catalog, EIGHTBIT_COMPONENTS};
use crate::mcp::protocol::{
    ResourceContents, ResourceDefinition, ToolCallResult, ToolDefinition,
};
use crate::providers::library::{
    component_resources, context_payload, context_text, list_payload, search_payload,
    strip_scheme,
};
use crate::providers::{optional_str, required_str, Provider, ProviderId};

/// Style domain advertised by this library.
const STYLE_DOMAIN: &str = "rpg_8bit";

/// Token theme that pairs with these components.
const PREFERRED_THEME: &str = "rpg_8bit";

/// 8bitcn component catalog.
pub struct EightbitProvider {
    catalog: Catalog,
}

impl EightbitProvider {
    /// Wraps the static 8bitcn catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            catalog: Catalog::new(EIGHTBIT_COMPONENTS),
        }
    }

    fn component_stub(name: &str) -> String {
        format!(
            "// 8bitcn Component: {name}\n\
             // This component is available from 8bitcn\n\
             // Visit https://www.8bitcn.com/docs/components/{name} for documentation\n\n\
             // Style Domain: {STYLE_DOMAIN}\n\
             // Preferred Theme: {PREFERRED_THEME}\n\n\
             // Installation: pnpm dlx shadcn@latest add @8bitcn/{name}"
        )
    }
}

impl Default for EightbitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for EightbitProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Eightbit
    }

    fn tools(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: "eightbit_get_component".to_string(),
                description: Some(
                    "Get an 8bitcn retro component by name (e.g., 'button', 'health-bar', \
                     'mana-bar')"
                        .to_string(),
                ),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "componentName": {
                            "type": "string",
                            "description": "Name of the 8bitcn component to retrieve",
                        },
                    },
                    "required": ["componentName"],
                }),
            },
            ToolDefinition {
                name: "eightbit_list_components".to_string(),
                description: Some(
                    "List all available 8bitcn retro components".to_string(),
                ),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Optional category filter (e.g., 'rpg', 'form', \
                                            'overlay')",
                        },
                    },
                }),
            },
            ToolDefinition {
                name: "eightbit_search_components".to_string(),
                description: Some(
                    "Search 8bitcn components by keyword, including usage context".to_string(),
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
                name: "eightbit_get_component_context".to_string(),
                description: Some(
                    "Get usage context for an 8bitcn component: use cases, when to use it, \
                     and related components"
                        .to_string(),
                ),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "componentName": {
                            "type": "string",
                            "description": "Name of the 8bitcn component",
                        },
                    },
                    "required": ["componentName"],
                }),
            },
        ]
    }

    fn resources(&self) -> Vec<ResourceDefinition> {
        component_resources(&self.catalog, "8bit")
    }

    fn call_tool(&self, name: &str, args: &Value) -> ToolCallResult {
        match name {
            "eightbit_get_component" => match required_str(args, "componentName") {
                Ok(component) => ToolCallResult::text(Self::component_stub(component)),
                Err(err) => ToolCallResult::error(err.to_string()),
            },
            "eightbit_list_components" => {
                let category = optional_str(args, "category");
                let mut body = list_payload(&self.catalog, category);
                if let Some(object) = body.as_object_mut() {
                    object.insert("styleDomain".to_string(), STYLE_DOMAIN.into());
                    object.insert("preferredTheme".to_string(), PREFERRED_THEME.into());
                }
                ToolCallResult::json(&body)
            }
            "eightbit_search_components" => {
                let query = optional_str(args, "query").unwrap_or_default();
                ToolCallResult::json(&search_payload(&self.catalog, query))
            }
            "eightbit_get_component_context" => match required_str(args, "componentName") {
                Ok(component) => match context_payload(&self.catalog, component) {
                    Ok(payload) => ToolCallResult::json(&payload),
                    Err(message) => ToolCallResult::error(message),
                },
                Err(err) => ToolCallResult::error(err.to_string()),
            },
            other => ToolCallResult::error(format!("Unknown 8bitcn tool: {other}")),
        }
    }

    fn read_resource(&self, uri: &str) -> Option<ResourceContents> {
        let name = strip_scheme(uri, "8bit")?;
        let context = self
            .catalog
            .get(name)
            .map(context_text)
            .unwrap_or_default();

        Some(ResourceContents {
            uri: uri.to_string(),
            mime_type: "text/plain".to_string(),
            text: format!("{}{context}", Self::component_stub(name)),
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
    fn list_advertises_style_domain() {
        let provider = EightbitProvider::new();
        let body = payload(&provider.call_tool("eightbit_list_components", &json!({})));
        assert_eq!(body["styleDomain"], "rpg_8bit");
        assert_eq!(body["preferredTheme"], "rpg_8bit");
    }

    #[test]
    fn rpg_category_has_game_components() {
        let provider = EightbitProvider::new();
        let body = payload(
            &provider.call_tool("eightbit_list_components", &json!({"category": "rpg"})),
        );
        let names: Vec<_> = body["components"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect();
        assert!(names.contains(&"health-bar".to_string()));
        assert!(names.contains(&"mana-bar".to_string()));
    }

    #[test]
    fn context_tool_round_trip() {
        let provider = EightbitProvider::new();
        let result = provider.call_tool(
            "eightbit_get_component_context",
            &json!({"componentName": "health-bar"}),
        );
        assert!(!result.is_error);
        let body = payload(&result);
        assert!(body["relatedComponents"]
            .as_array()
            .unwrap()
            .contains(&json!("mana-bar")));
    }

    #[test]
    fn resource_uses_8bit_scheme() {
        let provider = EightbitProvider::new();
        let contents = provider.read_resource("8bit://health-bar").unwrap();
        assert!(contents.text.contains("pnpm dlx shadcn@latest add @8bitcn/health-bar"));
        assert!(contents.text.contains("// Use Cases:"));
        assert!(provider.read_resource("eightbit://health-bar").is_none());
    }
}
