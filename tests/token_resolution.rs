//! Integration tests for design-token resolution through the tool surface.
//!
//! These tests exercise the Brand System tools end-to-end via the provider
//! registry: JSON payload shapes, theme fallback, and the structured
//! "not found" messages with suggestions.

use std::sync::Arc;

use serde_json::{json, Value};

use designkit_mcp::mcp::protocol::{ToolCallResult, ToolContent};
use designkit_mcp::providers::ProviderRegistry;
use designkit_mcp::tokens::TokenStore;

fn registry() -> ProviderRegistry {
    let store = Arc::new(TokenStore::embedded("default").expect("embedded token data parses"));
    ProviderRegistry::with_default_providers(store, None)
}

fn text(result: &ToolCallResult) -> &str {
    let ToolContent::Text { text } = &result.content[0];
    text
}

fn payload(result: &ToolCallResult) -> Value {
    serde_json::from_str(text(result)).expect("tool output is JSON")
}

// =============================================================================
// Color Lookup Tests
// =============================================================================

#[test]
fn test_get_color_nested_path() {
    let registry = registry();
    let result = registry.call_tool("brand_get_color", &json!({"colorName": "primary.500"}));

    assert!(!result.is_error);
    let body = payload(&result);
    assert_eq!(body["color"], "#3b82f6");
    assert_eq!(body["colorName"], "primary.500");
    assert_eq!(body["theme"], "default");
    assert_eq!(body["valid"], true);
}

#[test]
fn test_get_color_theme_switch() {
    let registry = registry();
    let result = registry.call_tool(
        "brand_get_color",
        &json!({"colorName": "success", "theme": "rpg_8bit"}),
    );

    let body = payload(&result);
    assert_eq!(body["color"], "#92cc41");
    assert_eq!(body["theme"], "rpg_8bit");
}

#[test]
fn test_get_color_unknown_theme_falls_back() {
    let registry = registry();
    let result = registry.call_tool(
        "brand_get_color",
        &json!({"colorName": "success", "theme": "vaporwave"}),
    );

    assert!(!result.is_error);
    assert_eq!(payload(&result)["theme"], "default");
}

#[test]
fn test_get_color_misspelling_suggests() {
    let registry = registry();
    let result = registry.call_tool("brand_get_color", &json!({"colorName": "primry.500"}));

    assert!(result.is_error);
    let message = text(&result);
    assert!(message.contains("Color token 'primry.500' not found"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("primary.500"));
}

#[test]
fn test_get_color_missing_argument() {
    let registry = registry();
    let result = registry.call_tool("brand_get_color", &json!({}));

    assert!(result.is_error);
    assert!(text(&result).contains("colorName"));
}

// =============================================================================
// Spacing, Typography, Radius, Shadow Tests
// =============================================================================

#[test]
fn test_get_spacing_scale_precedence() {
    let registry = registry();
    let result = registry.call_tool("brand_get_spacing", &json!({"size": "4"}));

    let body = payload(&result);
    assert_eq!(body["size"], "scale.4");
    assert_eq!(body["value"], "1rem");
    assert_eq!(body["valid"], true);
}

#[test]
fn test_get_spacing_semantic_fallthrough() {
    let registry = registry();
    let result = registry.call_tool("brand_get_spacing", &json!({"size": "md"}));

    assert_eq!(payload(&result)["size"], "semantic.md");
}

#[test]
fn test_get_typography_dot_path() {
    let registry = registry();
    let result = registry.call_tool(
        "brand_get_typography",
        &json!({"property": "fontSizes.base"}),
    );

    let body = payload(&result);
    assert_eq!(body["property"], "fontSizes.base");
    assert_eq!(body["value"], "1rem");
}

#[test]
fn test_get_radius_and_shadow() {
    let registry = registry();

    let radius = payload(&registry.call_tool("brand_get_radius", &json!({"size": "md"})));
    assert_eq!(radius["value"], "0.375rem");

    let shadow = payload(&registry.call_tool("brand_get_shadow", &json!({"size": "none"})));
    assert_eq!(shadow["value"], "none");
    assert_eq!(shadow["valid"], true);
}

// =============================================================================
// Theme and Listing Tests
// =============================================================================

#[test]
fn test_get_theme_bundle() {
    let registry = registry();
    let result = registry.call_tool("brand_get_theme", &json!({"themeName": "rpg_8bit"}));

    assert!(!result.is_error);
    let body = payload(&result);
    for key in ["colors", "spacing", "typography", "radii", "shadows"] {
        assert!(body["tokens"][key].is_object(), "missing {key}");
    }
}

#[test]
fn test_get_theme_unknown_is_tool_error() {
    let registry = registry();
    let result = registry.call_tool("brand_get_theme", &json!({"themeName": "vaporwave"}));

    assert!(result.is_error);
    assert!(text(&result).contains("Theme 'vaporwave' not found"));
}

#[test]
fn test_list_tokens_reports_theme() {
    let registry = registry();
    let result = registry.call_tool("brand_list_tokens", &json!({"theme": "rpg_8bit"}));

    let body = payload(&result);
    assert_eq!(body["theme"], "rpg_8bit");
    assert!(body["tokens"]["colors"].is_object());
}

// =============================================================================
// Failure Isolation
// =============================================================================

#[test]
fn test_failed_lookup_does_not_poison_registry() {
    let registry = registry();

    let bad = registry.call_tool("brand_get_color", &json!({"colorName": "nope"}));
    assert!(bad.is_error);

    let good = registry.call_tool("brand_get_color", &json!({"colorName": "success"}));
    assert!(!good.is_error);
    assert_eq!(payload(&good)["color"], "#22c55e");
}
