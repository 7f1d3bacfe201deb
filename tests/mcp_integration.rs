//! Integration tests for MCP protocol handling.
//!
//! These tests verify the JSON-RPC 2.0 protocol implementation, the merged
//! tool and resource surface across all providers, and resource routing by
//! URI scheme.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;

use designkit_mcp::mcp::protocol::{parse_message, IncomingMessage, RequestId};
use designkit_mcp::providers::ProviderRegistry;
use designkit_mcp::tokens::TokenStore;

fn registry() -> ProviderRegistry {
    let store = Arc::new(TokenStore::embedded("default").expect("embedded token data parses"));
    ProviderRegistry::with_default_providers(store, None)
}

// =============================================================================
// Protocol Parsing Tests
// =============================================================================

#[test]
fn test_parse_initialize_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {
                "name": "test-client",
                "version": "1.0.0"
            }
        }
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Request(req) = result.unwrap() {
        assert_eq!(req.method, "initialize");
        assert_eq!(req.id, RequestId::Number(1));
    } else {
        panic!("Expected Request");
    }
}

#[test]
fn test_parse_tools_call_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": "abc",
        "method": "tools/call",
        "params": {
            "name": "brand_get_color",
            "arguments": {"colorName": "primary.500"}
        }
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Request(req) = result.unwrap() {
        assert_eq!(req.method, "tools/call");
        assert_eq!(req.id, RequestId::String("abc".to_string()));
    } else {
        panic!("Expected Request");
    }
}

#[test]
fn test_parse_notification() {
    let json = r#"{
        "jsonrpc": "2.0",
        "method": "notifications/initialized"
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());
    assert!(matches!(result.unwrap(), IncomingMessage::Notification(_)));
}

#[test]
fn test_parse_rejects_malformed_json() {
    assert!(parse_message("{ not json").is_err());
}

// =============================================================================
// Merged Tool Surface Tests
// =============================================================================

#[test]
fn test_registry_has_all_providers() {
    let registry = registry();
    assert_eq!(registry.provider_count(), 7);
    assert_eq!(registry.tool_count(), 33);
}

#[test]
fn test_tool_names_are_unique() {
    let registry = registry();
    let tools = registry.list_tools();
    let names: HashSet<_> = tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names.len(), tools.len());
}

#[test]
fn test_every_tool_has_an_object_schema() {
    let registry = registry();
    for tool in registry.list_tools() {
        assert_eq!(
            tool.input_schema["type"], "object",
            "{} schema must be an object",
            tool.name
        );
    }
}

#[test]
fn test_unknown_tool_is_a_tool_error() {
    let registry = registry();
    let result = registry.call_tool("brand_get_gradient", &json!({}));
    assert!(result.is_error);
}

// =============================================================================
// Resource Routing Tests
// =============================================================================

#[test]
fn test_resource_list_covers_all_schemes() {
    let registry = registry();
    let resources = registry.list_resources();

    for scheme in [
        "brand://",
        "shadcn://",
        "magicui://",
        "aceternity://",
        "8bit://",
        "component://",
        "ai://",
    ] {
        assert!(
            resources.iter().any(|r| r.uri.starts_with(scheme)),
            "no resources under {scheme}"
        );
    }
}

#[test]
fn test_every_listed_resource_is_readable() {
    let registry = registry();
    for resource in registry.list_resources() {
        let contents = registry.read_resource(&resource.uri);
        assert!(contents.is_some(), "{} must be readable", resource.uri);
        let contents = contents.unwrap();
        assert_eq!(contents.uri, resource.uri);
        assert!(!contents.text.is_empty());
    }
}

#[test]
fn test_brand_resource_is_json() {
    let registry = registry();
    let contents = registry.read_resource("brand://colors").unwrap();
    assert_eq!(contents.mime_type, "application/json");
    assert!(serde_json::from_str::<serde_json::Value>(&contents.text).is_ok());
}

#[test]
fn test_unknown_scheme_is_unroutable() {
    let registry = registry();
    assert!(registry.read_resource("ftp://colors").is_none());
}
