//! The shadcn/ui component-library provider.
//!
//! Serves the static shadcn catalog through five `shadcn_*` tools and the
//! `shadcn://` resource scheme. Component source is not vendored; get
//! operations return pointers to the upstream documentation and the CLI
//! installation command.

use serde_json::Value;

use crate::catalog::{display_name, Catalog, SHADCN_COMPONENTS};
use crate::mcp::protocol::{
    ResourceContents, ResourceDefinition, ToolCallResult, ToolDefinition,
};
use crate::providers::library::{
    component_resources, list_payload, search_payload, strip_scheme,
};
use crate::providers::{optional_str, required_str, Provider, ProviderId};

/// shadcn/ui component catalog.
pub struct ShadcnProvider {
    catalog: Catalog,
}

impl ShadcnProvider {
    /// Wraps the static shadcn catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            catalog: Catalog::new(SHADCN_COMPONENTS),
        }
    }

    fn component_stub(name: &str) -> String {
        format!(
            "// Shadcn UI Component: {name}\n\
             // This component is available from shadcn/ui\n\
             // Visit https://ui.shadcn.com/docs/components/{name} for documentation\n\n\
             // Installation: npx shadcn@latest add {name}\n\
             // Usage: import {{ {import} }} from '@/components/ui/{name}'",
            import = display_name(name).replace(' ', "")
        )
    }

    fn code_stub(name: &str) -> String {
        format!(
            "// Shadcn UI Component: {name}\n\
             // Full source code available at: https://ui.shadcn.com/docs/components/{name}\n\n\
             // To get the actual code, run: npx shadcn@latest add {name}\n\
             // Or visit: https://ui.shadcn.com/docs/components/{name}\n\n\
             // This will add the component to your components/ui directory"
        )
    }

    fn installation_stub(name: &str) -> String {
        format!(
            "To install the {name} component from shadcn/ui, run:\n\n\
             npx shadcn@latest add {name}\n\n\
             This will add the component to your project's components/ui directory."
        )
    }
}

impl Default for ShadcnProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for ShadcnProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Shadcn
    }

    fn tools(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: "shadcn_get_component".to_string(),
                description: Some(
                    "Get a shadcn/ui component by name (e.g., 'button', 'card', 'dialog', \
                     'dropdown-menu')"
                        .to_string(),
                ),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "componentName": {
                            "type": "string",
                            "description": "Name of the shadcn/ui component to retrieve",
                        },
                    },
                    "required": ["componentName"],
                }),
            },
            ToolDefinition {
                name: "shadcn_list_components".to_string(),
                description: Some("List all available shadcn/ui components".to_string()),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Optional category filter (e.g., 'form', 'overlay', \
                                            'layout', 'feedback')",
                        },
                    },
                }),
            },
            ToolDefinition {
                name: "shadcn_search_components".to_string(),
                description: Some("Search shadcn/ui components by keyword".to_string()),
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
                name: "shadcn_get_component_code".to_string(),
                description: Some(
                    "Get the source code location and installation command for a shadcn/ui \
                     component"
                        .to_string(),
                ),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "componentName": {
                            "type": "string",
                            "description": "Name of the shadcn/ui component",
                        },
                    },
                    "required": ["componentName"],
                }),
            },
            ToolDefinition {
                name: "shadcn_get_installation_command".to_string(),
                description: Some(
                    "Get the CLI command to install a shadcn/ui component".to_string(),
                ),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "componentName": {
                            "type": "string",
                            "description": "Name of the shadcn/ui component",
                        },
                    },
                    "required": ["componentName"],
                }),
            },
        ]
    }

    fn resources(&self) -> Vec<ResourceDefinition> {
        component_resources(&self.catalog, "shadcn")
    }

    fn call_tool(&self, name: &str, args: &Value) -> ToolCallResult {
        match name {
            "shadcn_get_component" => match required_str(args, "componentName") {
                Ok(component) => ToolCallResult::text(Self::component_stub(component)),
                Err(err) => ToolCallResult::error(err.to_string()),
            },
            "shadcn_list_components" => {
                let category = optional_str(args, "category");
                ToolCallResult::json(&list_payload(&self.catalog, category))
            }
            "shadcn_search_components" => {
                let query = optional_str(args, "query").unwrap_or_default();
                ToolCallResult::json(&search_payload(&self.catalog, query))
            }
            "shadcn_get_component_code" => match required_str(args, "componentName") {
                Ok(component) => ToolCallResult::text(Self::code_stub(component)),
                Err(err) => ToolCallResult::error(err.to_string()),
            },
            "shadcn_get_installation_command" => match required_str(args, "componentName") {
                Ok(component) => ToolCallResult::text(Self::installation_stub(component)),
                Err(err) => ToolCallResult::error(err.to_string()),
            },
            other => ToolCallResult::error(format!("Unknown Shadcn UI tool: {other}")),
        }
    }

    fn read_resource(&self, uri: &str) -> Option<ResourceContents> {
        let name = strip_scheme(uri, "shadcn")?;

        Some(ResourceContents {
            uri: uri.to_string(),
            mime_type: "text/plain".to_string(),
            text: format!(
                "// Shadcn UI Component: {name}\n\
                 // Documentation: https://ui.shadcn.com/docs/components/{name}\n\
                 // Installation: npx shadcn@latest add {name}\n\n\
                 // The component will be added to: components/ui/{name}.tsx\n\
                 // Import it with: import {{ {import} }} from '@/components/ui/{name}'",
                import = display_name(name).replace(' ', "")
            ),
        })
    }
}
