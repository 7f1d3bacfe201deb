//! "Did you mean" suggestions for failed token lookups.
//!
//! Suggestions come from Levenshtein distance between the requested path
//! and every available token path, ranked nearest first. The noise filter
//! (`distance < requested length`) is a preserved compatibility heuristic,
//! not a principled similarity threshold: it can over-exclude short
//! requests and under-exclude long dissimilar candidates.

use serde_json::Value;

/// Computes the Levenshtein edit distance between two strings.
///
/// Unit-cost insertions, deletions, and substitutions over a full
/// `(len(a)+1) x (len(b)+1)` dynamic-programming table.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        matrix[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            if a[i - 1] == b[j - 1] {
                matrix[i][j] = matrix[i - 1][j - 1];
            } else {
                let delete = matrix[i - 1][j];
                let insert = matrix[i][j - 1];
                let substitute = matrix[i - 1][j - 1];
                matrix[i][j] = 1 + delete.min(insert).min(substitute);
            }
        }
    }

    matrix[a.len()][b.len()]
}

/// Finds token paths similar to `requested` among `available`.
///
/// Distances are computed case-insensitively. Exact matches are excluded,
/// as is any candidate whose distance is not strictly less than the
/// requested string's length. Returns at most `max_results` entries,
/// nearest first; ties keep the original ordering.
#[must_use]
pub fn similar_tokens(available: &[String], requested: &str, max_results: usize) -> Vec<String> {
    if available.is_empty() {
        return Vec::new();
    }

    let requested_lower = requested.to_lowercase();
    let threshold = requested.chars().count();

    let mut ranked: Vec<(usize, &String)> = available
        .iter()
        .map(|token| (edit_distance(&token.to_lowercase(), &requested_lower), token))
        .collect();

    // Stable sort keeps tree order for equal distances.
    ranked.sort_by_key(|(distance, _)| *distance);

    ranked
        .into_iter()
        .filter(|(distance, token)| *distance < threshold && token.as_str() != requested)
        .take(max_results)
        .map(|(_, token)| token.clone())
        .collect()
}

/// Enumerates all resolvable token paths in a tree, depth first.
///
/// Scalar leaves are emitted as `prefix.key` (or `key` at the root);
/// nested objects are recursed into instead of being emitted themselves.
/// Null values are skipped. Order follows the tree's insertion order.
#[must_use]
pub fn available_tokens(tree: &Value, prefix: &str) -> Vec<String> {
    let Some(map) = tree.as_object() else {
        return Vec::new();
    };

    let mut tokens = Vec::new();

    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::Null => {}
            Value::Object(_) => tokens.extend(available_tokens(value, &path)),
            _ => tokens.push(path),
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(edit_distance("primary", "primary"), 0);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn distance_to_empty_is_length() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abcd", ""), 4);
    }

    #[test]
    fn distance_counts_single_edits() {
        assert_eq!(edit_distance("kitten", "sitten"), 1);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn suggestions_exclude_exact_match() {
        let available = vec!["primary.500".to_string(), "primary.600".to_string()];
        let result = similar_tokens(&available, "primary.500", 3);
        assert!(!result.contains(&"primary.500".to_string()));
    }

    #[test]
    fn suggestions_are_ranked_nearest_first() {
        let available = vec![
            "secondary.500".to_string(),
            "primary.500".to_string(),
            "primary.600".to_string(),
        ];
        let result = similar_tokens(&available, "primary.900", 3);
        assert_eq!(result[0], "primary.500");
        assert_eq!(result[1], "primary.600");
    }

    #[test]
    fn suggestions_respect_max_results() {
        let available: Vec<String> = (0..20).map(|i| format!("spacing{i}")).collect();
        let result = similar_tokens(&available, "spacing99", 3);
        assert!(result.len() <= 3);
    }

    #[test]
    fn dissimilar_candidates_are_filtered() {
        // Distance from "md" to any of these is >= 2 == len("md").
        let available = vec!["fontFamilies.sans".to_string()];
        let result = similar_tokens(&available, "md", 3);
        assert!(result.is_empty());
    }

    #[test]
    fn empty_available_yields_nothing() {
        assert!(similar_tokens(&[], "anything", 3).is_empty());
    }

    #[test]
    fn enumeration_is_depth_first_in_tree_order() {
        let tree = json!({
            "primary": {"500": "#3b82f6", "600": "#2563eb"},
            "success": "#22c55e"
        });
        assert_eq!(
            available_tokens(&tree, ""),
            vec!["primary.500", "primary.600", "success"]
        );
    }

    #[test]
    fn enumeration_skips_null_and_honours_prefix() {
        let tree = json!({"a": null, "b": {"c": 1}});
        assert_eq!(available_tokens(&tree, "root"), vec!["root.b.c"]);
    }

    #[test]
    fn enumerated_paths_all_resolve() {
        use crate::tokens::resolve::resolve;

        let tree = json!({
            "scale": {"1": "0.25rem", "4": "1rem"},
            "semantic": {"md": "1rem", "lg": "1.5rem"},
            "gutter": "2rem"
        });

        for path in available_tokens(&tree, "") {
            assert!(resolve(&tree, &path).is_found(), "path {path} must resolve");
        }
    }
}
