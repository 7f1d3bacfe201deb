//! The brand design-token provider.
//!
//! Exposes the [`TokenStore`] through ten `brand_*` tools and the
//! `brand://` resource scheme. All token resolution, validation, and
//! suggestion logic lives in the tokens module; this layer turns lookups
//! into MCP payloads.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::TokenError;
use crate::mcp::protocol::{
    ResourceContents, ResourceDefinition, ToolCallResult, ToolDefinition,
};
use crate::providers::{required_str, theme_arg, Provider, ProviderId};
use crate::tokens::{TokenCategory, TokenLookup, TokenStore};

/// The shared response shape for single-value CSS token lookups; only the
/// key naming the resolved path differs per tool.
fn css_payload(path_key: &str, lookup: &TokenLookup) -> Value {
    let mut payload = serde_json::Map::new();
    payload.insert(path_key.to_string(), json!(lookup.path));
    payload.insert("value".to_string(), lookup.value.clone());
    payload.insert("theme".to_string(), json!(lookup.theme));
    payload.insert("valid".to_string(), json!(lookup.valid));
    Value::Object(payload)
}

/// Design-token and theme API.
pub struct BrandProvider {
    store: Arc<TokenStore>,
}

impl BrandProvider {
    /// Wraps the loaded token store.
    #[must_use]
    pub const fn new(store: Arc<TokenStore>) -> Self {
        Self { store }
    }

    /// Runs one tool; `None` means the name is not a brand tool.
    fn dispatch(&self, name: &str, args: &Value) -> Option<Result<Value, TokenError>> {
        let theme = theme_arg(args);

        let outcome = match name {
            "brand_get_color" => required_str(args, "colorName")
                .and_then(|color_name| self.store.get_color(color_name, theme))
                .map(|lookup| {
                    json!({
                        "color": lookup.value,
                        "colorName": lookup.path,
                        "theme": lookup.theme,
                        "valid": lookup.valid,
                    })
                }),
            "brand_list_colors" => {
                let (colors, theme_used) = self.store.list_category(TokenCategory::Colors, theme);
                Ok(json!({"colors": colors, "theme": theme_used}))
            }
            "brand_get_spacing" => required_str(args, "size")
                .and_then(|size| self.store.get_spacing(size, theme))
                .map(|lookup| css_payload("size", &lookup)),
            "brand_list_spacing" => {
                let (spacing, theme_used) = self.store.list_category(TokenCategory::Spacing, theme);
                Ok(json!({"spacing": spacing, "theme": theme_used}))
            }
            "brand_get_typography" => required_str(args, "property")
                .and_then(|property| self.store.get_typography(property, theme))
                .map(|lookup| css_payload("property", &lookup)),
            "brand_list_typography" => {
                let (typography, theme_used) =
                    self.store.list_category(TokenCategory::Typography, theme);
                Ok(json!({"typography": typography, "theme": theme_used}))
            }
            "brand_get_radius" => required_str(args, "size")
                .and_then(|size| self.store.get_radius(size, theme))
                .map(|lookup| css_payload("size", &lookup)),
            "brand_get_shadow" => required_str(args, "size")
                .and_then(|size| self.store.get_shadow(size, theme))
                .map(|lookup| css_payload("size", &lookup)),
            "brand_get_theme" => {
                required_str(args, "themeName").and_then(|name| self.store.get_theme(name))
            }
            "brand_list_tokens" => {
                let (tokens, theme_used) = self.store.list_tokens(theme);
                Ok(json!({"tokens": tokens, "theme": theme_used}))
            }
            _ => return None,
        };

        Some(outcome)
    }
}

impl Provider for BrandProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Brand
    }

    fn tools(&self) -> Vec<ToolDefinition> {
        let theme_property = json!({
            "type": "string",
            "description": "Theme name (default: 'default')",
            "enum": ["default", "rpg_8bit"],
        });

        vec![
            ToolDefinition {
                name: "brand_get_color".to_string(),
                description: Some(
                    "Get a color value from the design system. Supports nested access \
                     (e.g., 'primary.500') and simple access (e.g., 'success')"
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "colorName": {
                            "type": "string",
                            "description": "Color name. Examples: 'primary.500' (nested), \
                                            'success' (simple), 'secondary.600' (nested)",
                        },
                        "theme": theme_property,
                    },
                    "required": ["colorName"],
                }),
            },
            ToolDefinition {
                name: "brand_list_colors".to_string(),
                description: Some("List all available colors in the design system".to_string()),
                input_schema: json!({
                    "type": "object",
                    "properties": {"theme": theme_property},
                }),
            },
            ToolDefinition {
                name: "brand_get_spacing".to_string(),
                description: Some("Get a spacing value from the design system".to_string()),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "size": {
                            "type": "string",
                            "description": "Spacing size (e.g., '4', 'md', 'lg')",
                        },
                        "theme": theme_property,
                    },
                    "required": ["size"],
                }),
            },
            ToolDefinition {
                name: "brand_list_spacing".to_string(),
                description: Some("List all available spacing values".to_string()),
                input_schema: json!({
                    "type": "object",
                    "properties": {"theme": theme_property},
                }),
            },
            ToolDefinition {
                name: "brand_get_typography".to_string(),
                description: Some(
                    "Get typography values from the design system. Supports nested access \
                     using dot notation"
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "property": {
                            "type": "string",
                            "description": "Typography property path. Examples: \
                                            'fontSizes.base', 'fontFamilies.sans', \
                                            'fontWeights.bold', 'lineHeights.tight'",
                        },
                        "theme": theme_property,
                    },
                    "required": ["property"],
                }),
            },
            ToolDefinition {
                name: "brand_list_typography".to_string(),
                description: Some("List all typography values".to_string()),
                input_schema: json!({
                    "type": "object",
                    "properties": {"theme": theme_property},
                }),
            },
            ToolDefinition {
                name: "brand_get_radius".to_string(),
                description: Some("Get border radius value".to_string()),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "size": {
                            "type": "string",
                            "description": "Radius size (e.g., 'md', 'lg', 'full')",
                        },
                        "theme": theme_property,
                    },
                    "required": ["size"],
                }),
            },
            ToolDefinition {
                name: "brand_get_shadow".to_string(),
                description: Some("Get shadow value".to_string()),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "size": {
                            "type": "string",
                            "description": "Shadow size (e.g., 'sm', 'md', 'lg')",
                        },
                        "theme": theme_property,
                    },
                    "required": ["size"],
                }),
            },
            ToolDefinition {
                name: "brand_get_theme".to_string(),
                description: Some("Get complete theme configuration".to_string()),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "themeName": {
                            "type": "string",
                            "description": "Theme name",
                            "enum": ["default", "rpg_8bit"],
                        },
                    },
                    "required": ["themeName"],
                }),
            },
            ToolDefinition {
                name: "brand_list_tokens".to_string(),
                description: Some("List all available design tokens".to_string()),
                input_schema: json!({
                    "type": "object",
                    "properties": {"theme": theme_property},
                }),
            },
        ]
    }

    fn resources(&self) -> Vec<ResourceDefinition> {
        let entries = [
            ("brand://colors", "Color Palette", "Complete color palette for the design system"),
            ("brand://spacing", "Spacing Scale", "Spacing scale values"),
            (
                "brand://typography",
                "Typography System",
                "Typography system (fonts, sizes, weights, line heights)",
            ),
            ("brand://radii", "Border Radii", "Border radius values"),
            ("brand://shadows", "Shadows", "Shadow values"),
            ("brand://themes", "Themes", "Complete theme configurations"),
        ];

        entries
            .into_iter()
            .map(|(uri, name, description)| ResourceDefinition {
                uri: uri.to_string(),
                name: name.to_string(),
                description: Some(description.to_string()),
                mime_type: "application/json".to_string(),
            })
            .collect()
    }

    fn call_tool(&self, name: &str, args: &Value) -> ToolCallResult {
        match self.dispatch(name, args) {
            Some(Ok(payload)) => ToolCallResult::json(&payload),
            Some(Err(err)) => ToolCallResult::error(err.to_string()),
            None => ToolCallResult::error(format!("Unknown Brand System tool: {name}")),
        }
    }

    fn read_resource(&self, uri: &str) -> Option<ResourceContents> {
        let name = uri.strip_prefix("brand://")?;

        let data = match name {
            "colors" => self.store.category_root(TokenCategory::Colors),
            "spacing" => self.store.category_root(TokenCategory::Spacing),
            "typography" => self.store.category_root(TokenCategory::Typography),
            "radii" => self.store.category_root(TokenCategory::Radii),
            "shadows" => self.store.category_root(TokenCategory::Shadows),
            "themes" => self.store.themes_root(),
            _ => return None,
        };

        Some(ResourceContents {
            uri: uri.to_string(),
            mime_type: "application/json".to_string(),
            text: serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::protocol::ToolContent;

    fn provider() -> BrandProvider {
        let store = Arc::new(TokenStore::embedded("default").expect("embedded data parses"));
        BrandProvider::new(store)
    }

    fn payload(result: &ToolCallResult) -> Value {
        let ToolContent::Text { text } = &result.content[0];
        serde_json::from_str(text).expect("tool output is JSON")
    }

    fn text(result: &ToolCallResult) -> &str {
        let ToolContent::Text { text } = &result.content[0];
        text
    }

    #[test]
    fn get_color_nested() {
        let result = provider().call_tool("brand_get_color", &json!({"colorName": "primary.500"}));
        assert!(!result.is_error);
        let body = payload(&result);
        assert_eq!(body["color"], "#3b82f6");
        assert_eq!(body["colorName"], "primary.500");
        assert_eq!(body["theme"], "default");
        assert_eq!(body["valid"], true);
    }

    #[test]
    fn get_color_missing_argument() {
        let result = provider().call_tool("brand_get_color", &json!({}));
        assert!(result.is_error);
        assert!(text(&result).contains("colorName"));
    }

    #[test]
    fn get_color_unknown_token_suggests() {
        let result = provider().call_tool("brand_get_color", &json!({"colorName": "primry.500"}));
        assert!(result.is_error);
        let message = text(&result);
        assert!(message.contains("Color token 'primry.500' not found in theme 'default'."));
        assert!(message.contains("Did you mean:"));
        assert!(message.contains("Available tokens:"));
    }

    #[test]
    fn get_spacing_reports_resolved_path() {
        let result = provider().call_tool("brand_get_spacing", &json!({"size": "4"}));
        let body = payload(&result);
        assert_eq!(body["size"], "scale.4");
        assert_eq!(body["value"], "1rem");
    }

    #[test]
    fn get_theme_unknown_is_error() {
        let result = provider().call_tool("brand_get_theme", &json!({"themeName": "vaporwave"}));
        assert!(result.is_error);
        assert_eq!(text(&result), "Theme 'vaporwave' not found");
    }

    #[test]
    fn get_theme_bundles_tokens() {
        let result = provider().call_tool("brand_get_theme", &json!({"themeName": "rpg_8bit"}));
        assert!(!result.is_error);
        let body = payload(&result);
        assert_eq!(body["styleDomain"], "rpg_8bit");
        assert!(body["tokens"]["colors"].is_object());
    }

    #[test]
    fn list_tokens_with_theme_fallback() {
        let result = provider().call_tool("brand_list_tokens", &json!({"theme": "nope"}));
        let body = payload(&result);
        assert_eq!(body["theme"], "default");
        assert!(body["tokens"]["shadows"].is_object());
    }

    #[test]
    fn theme_name_alias_is_accepted() {
        let result = provider().call_tool(
            "brand_get_color",
            &json!({"colorName": "success", "themeName": "rpg_8bit"}),
        );
        let body = payload(&result);
        assert_eq!(body["theme"], "rpg_8bit");
        assert_eq!(body["color"], "#92cc41");
    }

    #[test]
    fn resources_cover_all_categories() {
        let provider = provider();
        assert_eq!(provider.resources().len(), 6);
        let colors = provider.read_resource("brand://colors").unwrap();
        assert_eq!(colors.mime_type, "application/json");
        assert!(colors.text.contains("rpg_8bit"));
        assert!(provider.read_resource("brand://gradients").is_none());
    }
}
