//! The in-house component-library provider.
//!
//! A small, unprefixed tool namespace (`get_component`, `list_components`,
//! `create_component`) over the custom catalog, plus the `component://`
//! resource scheme. Creation is acknowledged but not persisted; the
//! catalog is immutable once the server starts.

use serde_json::{json, Value};

use crate::catalog::{display_name, Catalog, CUSTOM_COMPONENTS};
use crate::mcp::protocol::{
    ResourceContents, ResourceDefinition, ToolCallResult, ToolDefinition,
};
use crate::providers::library::strip_scheme;
use crate::providers::{required_str, Provider, ProviderId};

/// In-house component library.
pub struct CustomProvider {
    catalog: Catalog,
}

impl CustomProvider {
    /// Wraps the static custom catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            catalog: Catalog::new(CUSTOM_COMPONENTS),
        }
    }
}

impl Default for CustomProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for CustomProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Custom
    }

    fn tools(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: "get_component".to_string(),
                description: Some(
                    "Retrieve a specific component from your custom component library"
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "componentName": {
                            "type": "string",
                            "description": "The name of the component to retrieve",
                        },
                    },
                    "required": ["componentName"],
                }),
            },
            ToolDefinition {
                name: "list_components".to_string(),
                description: Some(
                    "List all available components in your custom library".to_string(),
                ),
                input_schema: json!({
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
                name: "create_component".to_string(),
                description: Some(
                    "Create a new component and add it to your library".to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Component name",
                        },
                        "code": {
                            "type": "string",
                            "description": "Component code/implementation",
                        },
                        "category": {
                            "type": "string",
                            "description": "Component category",
                        },
                    },
                    "required": ["name", "code"],
                }),
            },
        ]
    }

    fn resources(&self) -> Vec<ResourceDefinition> {
        self.catalog
            .iter()
            .map(|component| ResourceDefinition {
                uri: format!("component://{}", component.name),
                name: format!("{} Component", display_name(component.name)),
                description: Some(component.description.to_string()),
                mime_type: "text/plain".to_string(),
            })
            .collect()
    }

    fn call_tool(&self, name: &str, args: &Value) -> ToolCallResult {
        match name {
            "get_component" => match required_str(args, "componentName") {
                Ok(component) => ToolCallResult::text(format!(
                    "Component \"{component}\" retrieved. Component storage is not yet \
                     wired to a backing store."
                )),
                Err(err) => ToolCallResult::error(err.to_string()),
            },
            "list_components" => {
                let components: Vec<Value> = self
                    .catalog
                    .iter()
                    .map(|c| json!({"name": display_name(c.name), "category": c.category}))
                    .collect();
                ToolCallResult::json(&json!({"components": components}))
            }
            "create_component" => {
                let component = match required_str(args, "name") {
                    Ok(component) => component,
                    Err(err) => return ToolCallResult::error(err.to_string()),
                };
                if let Err(err) = required_str(args, "code") {
                    return ToolCallResult::error(err.to_string());
                }

                // Acknowledged only; the catalog is immutable at runtime.
                tracing::info!(component, "create_component acknowledged without persistence");
                ToolCallResult::text(format!(
                    "Component \"{component}\" created successfully. Persistence is not \
                     yet implemented; the component is not stored."
                ))
            }
            other => ToolCallResult::error(format!("Unknown custom component tool: {other}")),
        }
    }

    fn read_resource(&self, uri: &str) -> Option<ResourceContents> {
        let name = strip_scheme(uri, "component")?;

        Some(ResourceContents {
            uri: uri.to_string(),
            mime_type: "text/plain".to_string(),
            text: format!(
                "// {name} component placeholder\n\
                 // Component retrieval is not yet wired to a backing store"
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::protocol::ToolContent;

    fn text(result: &ToolCallResult) -> &str {
        let ToolContent::Text { text } = &result.content[0];
        text
    }

    #[test]
    fn list_components_uses_display_names() {
        let provider = CustomProvider::new();
        let result = provider.call_tool("list_components", &json!({}));
        let body: Value = serde_json::from_str(text(&result)).unwrap();
        let names: Vec<_> = body["components"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Button", "Card", "Modal"]);
    }

    #[test]
    fn create_component_acknowledges_without_persisting() {
        let provider = CustomProvider::new();
        let result = provider.call_tool(
            "create_component",
            &json!({"name": "banner", "code": "<div/>"}),
        );
        assert!(!result.is_error);
        assert!(text(&result).contains("banner"));

        // The catalog is unchanged.
        let listing = provider.call_tool("list_components", &json!({}));
        assert!(!text(&listing).contains("banner"));
    }

    #[test]
    fn create_component_requires_name_and_code() {
        let provider = CustomProvider::new();
        assert!(provider
            .call_tool("create_component", &json!({"name": "banner"}))
            .is_error);
        assert!(provider
            .call_tool("create_component", &json!({"code": "<div/>"}))
            .is_error);
    }

    #[test]
    fn resource_scheme() {
        let provider = CustomProvider::new();
        assert!(provider.read_resource("component://button").is_some());
        assert!(provider.read_resource("brand://colors").is_none());
    }
}
