//! The Magic UI component-library provider.
//!
//! Three `magicui_*` tools over the static Magic UI catalog, plus the
//! `magicui://` resource scheme.

use serde_json::Value;

use crate::catalog::{Catalog, MAGICUI_COMPONENTS};
use crate::mcp::protocol::{
    ResourceContents, ResourceDefinition, ToolCallResult, ToolDefinition,
};
use crate::providers::library::{
    component_resources, list_payload, search_payload, strip_scheme,
};
use crate::providers::{optional_str, required_str, Provider, ProviderId};

/// Magic UI component catalog.
pub struct MagicUiProvider {
    catalog: Catalog,
}

impl MagicUiProvider {
    /// Wraps the static Magic UI catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            catalog: Catalog::new(MAGICUI_COMPONENTS),
        }
    }
}

impl Default for MagicUiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for MagicUiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::MagicUi
    }

    fn tools(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: "magicui_get_component".to_string(),
                description: Some(
                    "Get a Magic UI component by name (e.g., 'marquee', 'globe', \
                     'shimmer-button')"
                        .to_string(),
                ),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "componentName": {
                            "type": "string",
                            "description": "Name of the Magic UI component to retrieve",
                        },
                    },
                    "required": ["componentName"],
                }),
            },
            ToolDefinition {
                name: "magicui_list_components".to_string(),
                description: Some("List all available Magic UI components".to_string()),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Optional category filter (e.g., 'components', \
                                            'special-effects', 'text-animations', 'buttons', \
                                            'backgrounds')",
                        },
                    },
                }),
            },
            ToolDefinition {
                name: "magicui_search_components".to_string(),
                description: Some("Search Magic UI components by keyword".to_string()),
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
        ]
    }

    fn resources(&self) -> Vec<ResourceDefinition> {
        component_resources(&self.catalog, "magicui")
    }

    fn call_tool(&self, name: &str, args: &Value) -> ToolCallResult {
        match name {
            "magicui_get_component" => match required_str(args, "componentName") {
                Ok(component) => ToolCallResult::text(format!(
                    "// Magic UI Component: {component}\n\
                     // This component is available from Magic UI\n\
                     // Visit https://magicui.design to see the full component\n\n\
                     // To get the actual component code, integrate with Magic UI's API \
                     or component library\n\
                     // Example usage: import {{ {component} }} from '@magicui/react'"
                )),
                Err(err) => ToolCallResult::error(err.to_string()),
            },
            "magicui_list_components" => {
                let category = optional_str(args, "category");
                ToolCallResult::json(&list_payload(&self.catalog, category))
            }
            "magicui_search_components" => {
                let query = optional_str(args, "query").unwrap_or_default();
                ToolCallResult::json(&search_payload(&self.catalog, query))
            }
            other => ToolCallResult::error(format!("Unknown Magic UI tool: {other}")),
        }
    }

    fn read_resource(&self, uri: &str) -> Option<ResourceContents> {
        let name = strip_scheme(uri, "magicui")?;

        Some(ResourceContents {
            uri: uri.to_string(),
            mime_type: "text/plain".to_string(),
            text: format!(
                "// Magic UI Component: {name}\n\
                 // Full component code available at https://magicui.design/components/{name}\n\
                 // Install: npm install @magicui/react\n\
                 // Usage: import {{ {name} }} from '@magicui/react'"
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
    fn list_includes_special_effects_category() {
        let provider = MagicUiProvider::new();
        let body = payload(&provider.call_tool("magicui_list_components", &json!({})));
        assert!(body["categories"]
            .as_array()
            .unwrap()
            .contains(&json!("special-effects")));
    }

    #[test]
    fn search_by_category_keyword() {
        let provider = MagicUiProvider::new();
        let body = payload(
            &provider.call_tool("magicui_search_components", &json!({"query": "backgrounds"})),
        );
        assert!(body["count"].as_u64().unwrap() >= 5);
    }

    #[test]
    fn get_component_points_at_upstream() {
        let provider = MagicUiProvider::new();
        let result =
            provider.call_tool("magicui_get_component", &json!({"componentName": "globe"}));
        let ToolContent::Text { text } = &result.content[0];
        assert!(text.contains("magicui.design"));
    }

    #[test]
    fn resource_scheme_is_exclusive() {
        let provider = MagicUiProvider::new();
        assert!(provider.read_resource("magicui://dock").is_some());
        assert!(provider.read_resource("shadcn://dock").is_none());
    }
}
