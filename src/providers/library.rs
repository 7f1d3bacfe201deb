//! Shared payload builders for the component-library providers.
//!
//! The four library providers answer list/search/context calls with the
//! same JSON shapes; only the catalog data and the per-library stub text
//! differ.

use serde_json::{json, Map, Value};

use crate::catalog::{display_name, Catalog, Component};
use crate::mcp::protocol::ResourceDefinition;

/// Builds the list payload: matching components plus catalog stats.
#[must_use]
pub fn list_payload(catalog: &Catalog, category: Option<&str>) -> Value {
    let filtered = catalog.by_category(category);
    json!({
        "components": filtered,
        "total": catalog.len(),
        "categories": catalog.categories(),
        "filtered": filtered.len(),
    })
}

/// Builds the search payload: hits plus the echoed query.
#[must_use]
pub fn search_payload(catalog: &Catalog, query: &str) -> Value {
    let results = catalog.search(query);
    json!({
        "results": results,
        "query": query.to_lowercase(),
        "count": results.len(),
        "total": catalog.len(),
    })
}

/// Serialises one component with its usage context, or reports the miss.
///
/// # Errors
///
/// Returns a printable message when the catalog has no such component.
pub fn context_payload(catalog: &Catalog, name: &str) -> Result<Value, String> {
    let component = catalog
        .get(name)
        .ok_or_else(|| format!("Component {name} not found"))?;

    let mut payload = Map::new();
    payload.insert("name".to_string(), json!(component.name));
    payload.insert("category".to_string(), json!(component.category));
    payload.insert("description".to_string(), json!(component.description));
    if let Some(context) = component.context {
        payload.insert("useCases".to_string(), json!(context.use_cases));
        payload.insert("whenToUse".to_string(), json!(context.when_to_use));
        payload.insert("whenNotToUse".to_string(), json!(context.when_not_to_use));
        payload.insert(
            "relatedComponents".to_string(),
            json!(context.related_components),
        );
    }
    Ok(Value::Object(payload))
}

/// One resource definition per catalog entry, under the given URI scheme.
#[must_use]
pub fn component_resources(catalog: &Catalog, scheme: &str) -> Vec<ResourceDefinition> {
    catalog
        .iter()
        .map(|component| ResourceDefinition {
            uri: format!("{scheme}://{}", component.name),
            name: display_name(component.name),
            description: Some(component.description.to_string()),
            mime_type: "text/plain".to_string(),
        })
        .collect()
}

/// Strips a `scheme://` prefix, returning the remainder if it matches.
#[must_use]
pub fn strip_scheme<'a>(uri: &'a str, scheme: &str) -> Option<&'a str> {
    uri.strip_prefix(scheme)?.strip_prefix("://")
}

/// Renders a component's usage context as commented plain text, for
/// resource bodies.
#[must_use]
pub fn context_text(component: &Component) -> String {
    let Some(context) = component.context else {
        return String::new();
    };

    let section = |title: &str, lines: &[&str]| {
        let body: Vec<String> = lines.iter().map(|line| format!("// - {line}")).collect();
        format!("\n\n// {title}:\n{}", body.join("\n"))
    };

    format!(
        "{}{}{}\n\n// Related Components: {}",
        section("Use Cases", context.use_cases),
        section("When to Use", context.when_to_use),
        section("When NOT to Use", context.when_not_to_use),
        context.related_components.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EIGHTBIT_COMPONENTS, SHADCN_COMPONENTS};

    #[test]
    fn list_payload_reports_counts() {
        let catalog = Catalog::new(SHADCN_COMPONENTS);
        let all = list_payload(&catalog, None);
        assert_eq!(all["total"], all["filtered"]);

        let form = list_payload(&catalog, Some("form"));
        assert!(form["filtered"].as_u64().unwrap() < form["total"].as_u64().unwrap());
        assert!(form["categories"].as_array().unwrap().len() > 1);
    }

    #[test]
    fn search_payload_lowercases_query() {
        let catalog = Catalog::new(SHADCN_COMPONENTS);
        let payload = search_payload(&catalog, "BUTTON");
        assert_eq!(payload["query"], "button");
        assert!(payload["count"].as_u64().unwrap() >= 1);
    }

    #[test]
    fn context_payload_includes_guidance() {
        let catalog = Catalog::new(EIGHTBIT_COMPONENTS);
        let payload = context_payload(&catalog, "health-bar").unwrap();
        assert_eq!(payload["name"], "health-bar");
        assert!(payload["useCases"].as_array().is_some_and(|v| !v.is_empty()));
        assert!(payload["whenNotToUse"].is_array());
    }

    #[test]
    fn context_payload_reports_miss() {
        let catalog = Catalog::new(EIGHTBIT_COMPONENTS);
        let err = context_payload(&catalog, "warp-drive").unwrap_err();
        assert_eq!(err, "Component warp-drive not found");
    }

    #[test]
    fn resources_use_scheme_and_display_names() {
        let catalog = Catalog::new(SHADCN_COMPONENTS);
        let resources = component_resources(&catalog, "shadcn");
        assert_eq!(resources.len(), catalog.len());
        let dropdown = resources
            .iter()
            .find(|r| r.uri == "shadcn://dropdown-menu")
            .unwrap();
        assert_eq!(dropdown.name, "Dropdown Menu");
        assert_eq!(dropdown.mime_type, "text/plain");
    }

    #[test]
    fn strip_scheme_matches_exactly() {
        assert_eq!(strip_scheme("shadcn://button", "shadcn"), Some("button"));
        assert_eq!(strip_scheme("shadcn://button", "magicui"), None);
        assert_eq!(strip_scheme("shadcnx//button", "shadcn"), None);
    }
}
