//! Integration tests for component catalog tools.
//!
//! These tests exercise the library providers end-to-end via the provider
//! registry: listing, filtering, keyword search, and usage context.

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
// Listing Tests
// =============================================================================

#[test]
fn test_shadcn_list_shape() {
    let registry = registry();
    let result = registry.call_tool("shadcn_list_components", &json!({}));

    assert!(!result.is_error);
    let body = payload(&result);
    let total = body["total"].as_u64().unwrap();
    assert_eq!(body["components"].as_array().unwrap().len() as u64, total);
    assert!(body["categories"].as_array().unwrap().len() > 1);
    assert_eq!(body["filtered"], body["total"]);
}

#[test]
fn test_shadcn_list_category_filter() {
    let registry = registry();
    let result =
        registry.call_tool("shadcn_list_components", &json!({"category": "form"}));

    let body = payload(&result);
    let shown = body["components"].as_array().unwrap();
    assert_eq!(body["filtered"].as_u64().unwrap(), shown.len() as u64);
    assert!(body["filtered"].as_u64().unwrap() < body["total"].as_u64().unwrap());
    for component in shown {
        assert_eq!(component["category"], "form");
    }
}

#[test]
fn test_eightbit_list_advertises_theme_pairing() {
    let registry = registry();
    let result = registry.call_tool("eightbit_list_components", &json!({}));

    let body = payload(&result);
    assert_eq!(body["styleDomain"], "rpg_8bit");
    assert_eq!(body["preferredTheme"], "rpg_8bit");
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_lowercases_query() {
    let registry = registry();
    let result = registry.call_tool(
        "magicui_search_components",
        &json!({"query": "ANIMATED"}),
    );

    let body = payload(&result);
    assert_eq!(body["query"], "animated");
    assert!(body["count"].as_u64().unwrap() > 0);
}

#[test]
fn test_search_reaches_context_fields() {
    let registry = registry();
    let result = registry.call_tool(
        "eightbit_search_components",
        &json!({"query": "battle ui"}),
    );

    let body = payload(&result);
    let names: Vec<_> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert!(names.contains(&"health-bar".to_string()));
}

#[test]
fn test_search_no_results_is_not_an_error() {
    let registry = registry();
    let result = registry.call_tool(
        "aceternity_search_components",
        &json!({"query": "zzzzzz"}),
    );

    assert!(!result.is_error);
    assert_eq!(payload(&result)["count"], 0);
}

// =============================================================================
// Context and Retrieval Tests
// =============================================================================

#[test]
fn test_aceternity_context_payload() {
    let registry = registry();
    let result = registry.call_tool(
        "aceternity_get_component_context",
        &json!({"componentName": "3d-card-effect"}),
    );

    assert!(!result.is_error);
    let body = payload(&result);
    assert_eq!(body["name"], "3d-card-effect");
    assert!(!body["useCases"].as_array().unwrap().is_empty());
    assert!(!body["whenToUse"].as_array().unwrap().is_empty());
    assert!(body["whenNotToUse"].is_array());
    assert!(body["relatedComponents"].is_array());
}

#[test]
fn test_context_unknown_component_is_tool_error() {
    let registry = registry();
    let result = registry.call_tool(
        "aceternity_get_component_context",
        &json!({"componentName": "warp-drive"}),
    );

    assert!(result.is_error);
    assert!(text(&result).contains("warp-drive"));
}

#[test]
fn test_shadcn_installation_command() {
    let registry = registry();
    let result = registry.call_tool(
        "shadcn_get_installation_command",
        &json!({"componentName": "button"}),
    );

    assert!(!result.is_error);
    assert!(text(&result).contains("npx shadcn@latest add button"));
}

#[test]
fn test_custom_list_uses_display_names() {
    let registry = registry();
    let result = registry.call_tool("list_components", &json!({}));

    let body = payload(&result);
    let names: Vec<_> = body["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Button", "Card", "Modal"]);
}
