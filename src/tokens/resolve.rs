//! Dot-notation nested-path resolution over token trees.
//!
//! Resolution is prefix-consistent: traversal fails at the first segment
//! that is absent or not traversable, and the failure reports the longest
//! prefix that did resolve. A leaf is not required to be a scalar; a
//! nested subtree is a legal, serialisable result.

use serde_json::Value;

/// The outcome of resolving a dot-delimited path against a token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The path resolved. `path` is the full requested path.
    Found {
        /// The resolved value (scalar or subtree, returned verbatim).
        value: Value,
        /// The full dot-delimited path that located the value.
        path: String,
    },
    /// The path did not resolve.
    NotFound {
        /// The deepest prefix that existed, or the full requested path
        /// when no segment resolved at all.
        resolved: String,
    },
}

impl Resolution {
    /// Returns `true` if the lookup succeeded.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Returns the resolved value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Found { value, .. } => Some(value),
            Self::NotFound { .. } => None,
        }
    }
}

/// Resolves `path` against `tree`.
///
/// A path without dots is a direct key lookup. A dotted path is traversed
/// segment by segment; descending into a scalar or missing key stops the
/// traversal. An empty segment (e.g. from a trailing dot) is an ordinary,
/// almost-certainly-absent key and needs no special casing.
#[must_use]
pub fn resolve(tree: &Value, path: &str) -> Resolution {
    let Some(root) = tree.as_object() else {
        // Not a traversable mapping at all.
        return Resolution::NotFound {
            resolved: path.to_string(),
        };
    };

    if !path.contains('.') {
        return root.get(path).map_or_else(
            || Resolution::NotFound {
                resolved: path.to_string(),
            },
            |value| Resolution::Found {
                value: value.clone(),
                path: path.to_string(),
            },
        );
    }

    let mut current = tree;
    let mut resolved = String::new();

    for segment in path.split('.') {
        let next = current.as_object().and_then(|map| map.get(segment));
        let Some(next) = next else {
            return Resolution::NotFound {
                resolved: if resolved.is_empty() {
                    path.to_string()
                } else {
                    resolved
                },
            };
        };

        if !resolved.is_empty() {
            resolved.push('.');
        }
        resolved.push_str(segment);
        current = next;
    }

    Resolution::Found {
        value: current.clone(),
        path: path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> Value {
        json!({
            "primary": {"500": "#3b82f6", "600": "#2563eb"},
            "success": "#22c55e"
        })
    }

    #[test]
    fn resolves_nested_path() {
        let tree = sample_tree();
        let result = resolve(&tree, "primary.500");
        assert_eq!(
            result,
            Resolution::Found {
                value: json!("#3b82f6"),
                path: "primary.500".to_string(),
            }
        );
    }

    #[test]
    fn resolves_simple_key() {
        let tree = sample_tree();
        let result = resolve(&tree, "success");
        assert_eq!(
            result,
            Resolution::Found {
                value: json!("#22c55e"),
                path: "success".to_string(),
            }
        );
    }

    #[test]
    fn simple_key_may_return_subtree() {
        let tree = sample_tree();
        let result = resolve(&tree, "primary");
        assert_eq!(
            result.value(),
            Some(&json!({"500": "#3b82f6", "600": "#2563eb"}))
        );
    }

    #[test]
    fn missing_leaf_reports_deepest_prefix() {
        let tree = sample_tree();
        let result = resolve(&tree, "primary.999");
        assert_eq!(
            result,
            Resolution::NotFound {
                resolved: "primary".to_string(),
            }
        );
    }

    #[test]
    fn scalar_intermediate_reports_prefix() {
        let tree = sample_tree();
        // "success" is a scalar, so "success.dark" stops there.
        let result = resolve(&tree, "success.dark");
        assert_eq!(
            result,
            Resolution::NotFound {
                resolved: "success".to_string(),
            }
        );
    }

    #[test]
    fn missing_first_segment_reports_full_path() {
        let tree = sample_tree();
        let result = resolve(&tree, "tertiary.500");
        assert_eq!(
            result,
            Resolution::NotFound {
                resolved: "tertiary.500".to_string(),
            }
        );
    }

    #[test]
    fn non_object_tree_fails_with_full_path() {
        let result = resolve(&json!(null), "primary.500");
        assert_eq!(
            result,
            Resolution::NotFound {
                resolved: "primary.500".to_string(),
            }
        );

        let result = resolve(&json!("scalar"), "primary");
        assert!(!result.is_found());
    }

    #[test]
    fn trailing_dot_is_an_ordinary_miss() {
        let tree = sample_tree();
        let result = resolve(&tree, "primary.");
        assert_eq!(
            result,
            Resolution::NotFound {
                resolved: "primary".to_string(),
            }
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let tree = sample_tree();
        let first = resolve(&tree, "primary.600");
        let second = resolve(&tree, "primary.600");
        assert_eq!(first, second);
    }
}
