//! The loaded design-token catalog and its lookup operations.
//!
//! Token data is embedded in the binary and parsed once at startup into an
//! immutable [`TokenStore`]. Five category trees (colors, spacing,
//! typography, radii, shadows) are keyed by theme name, alongside a theme
//! registry with per-theme metadata. Nothing is mutated after load, so no
//! locking is needed.
//!
//! Per-token lookups fall back to the default theme when the requested
//! theme is absent; only whole-theme fetches ([`TokenStore::get_theme`])
//! fail on an unknown theme.

use serde_json::Value;

use crate::error::TokenError;
use crate::tokens::resolve::{resolve, Resolution};
use crate::tokens::suggest::{available_tokens, similar_tokens};
use crate::tokens::validate::{is_valid_color, is_valid_css_value};

/// Maximum number of "did you mean" suggestions in a failure message.
const MAX_SUGGESTIONS: usize = 3;

/// Maximum number of sample token paths in a failure message.
const SAMPLE_SIZE: usize = 10;

static JSON_NULL: Value = Value::Null;

/// A design-token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    /// Color palette tokens.
    Colors,
    /// Spacing scale and semantic spacing tokens.
    Spacing,
    /// Font families, sizes, weights, line heights.
    Typography,
    /// Border radius tokens.
    Radii,
    /// Box shadow tokens.
    Shadows,
}

impl TokenCategory {
    /// Label used in error messages ("Color token '...' not found").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Colors => "Color",
            Self::Spacing => "Spacing",
            Self::Typography => "Typography",
            Self::Radii => "Radius",
            Self::Shadows => "Shadow",
        }
    }

    /// Key used when aggregating categories into a bundle.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Spacing => "spacing",
            Self::Typography => "typography",
            Self::Radii => "radii",
            Self::Shadows => "shadows",
        }
    }

    /// All categories, in bundle order.
    pub const ALL: [Self; 5] = [
        Self::Colors,
        Self::Spacing,
        Self::Typography,
        Self::Radii,
        Self::Shadows,
    ];
}

/// A successful token lookup.
#[derive(Debug, Clone)]
pub struct TokenLookup {
    /// The resolved value (scalar or subtree).
    pub value: Value,
    /// The full path that located the value.
    pub path: String,
    /// The theme actually used, after default fallback.
    pub theme: String,
    /// Advisory validation verdict for the value.
    pub valid: bool,
}

/// The immutable design-token catalog.
pub struct TokenStore {
    colors: Value,
    spacing: Value,
    typography: Value,
    radii: Value,
    shadows: Value,
    themes: Value,
    default_theme: String,
}

impl TokenStore {
    /// Loads the embedded token data.
    ///
    /// # Errors
    ///
    /// Returns an error if any embedded data file is malformed JSON.
    pub fn embedded(default_theme: impl Into<String>) -> Result<Self, serde_json::Error> {
        Ok(Self {
            colors: serde_json::from_str(include_str!("../../tokens/colors.json"))?,
            spacing: serde_json::from_str(include_str!("../../tokens/spacing.json"))?,
            typography: serde_json::from_str(include_str!("../../tokens/typography.json"))?,
            radii: serde_json::from_str(include_str!("../../tokens/radii.json"))?,
            shadows: serde_json::from_str(include_str!("../../tokens/shadows.json"))?,
            themes: serde_json::from_str(include_str!("../../tokens/themes.json"))?,
            default_theme: default_theme.into(),
        })
    }

    /// Theme names in the embedded registry, in file order.
    ///
    /// Parses the embedded registry directly, so configuration can be
    /// validated before a store is constructed.
    #[must_use]
    pub fn theme_names() -> Vec<String> {
        serde_json::from_str::<Value>(include_str!("../../tokens/themes.json"))
            .ok()
            .and_then(|root| {
                root.get("themes").and_then(|themes| {
                    themes
                        .as_object()
                        .map(|object| object.keys().cloned().collect())
                })
            })
            .unwrap_or_default()
    }

    /// Returns `true` if the embedded registry has a theme named `name`.
    #[must_use]
    pub fn known_theme(name: &str) -> bool {
        Self::theme_names().iter().any(|theme| theme == name)
    }

    /// Returns `true` if the theme registry knows `name`.
    #[must_use]
    pub fn has_theme(&self, name: &str) -> bool {
        self.themes
            .get("themes")
            .and_then(|t| t.get(name))
            .is_some()
    }

    /// Resolves the effective theme name for a request: the requested
    /// theme if the registry knows it, otherwise the default theme.
    #[must_use]
    pub fn theme_or_default(&self, theme: Option<&str>) -> String {
        match theme {
            Some(name) if self.has_theme(name) => name.to_string(),
            _ => self.default_theme.clone(),
        }
    }

    /// The raw per-theme file for a category (all themes).
    #[must_use]
    pub const fn category_root(&self, category: TokenCategory) -> &Value {
        match category {
            TokenCategory::Colors => &self.colors,
            TokenCategory::Spacing => &self.spacing,
            TokenCategory::Typography => &self.typography,
            TokenCategory::Radii => &self.radii,
            TokenCategory::Shadows => &self.shadows,
        }
    }

    /// The raw theme registry file.
    #[must_use]
    pub const fn themes_root(&self) -> &Value {
        &self.themes
    }

    /// One category's tree for a theme, falling back to the default theme
    /// when the category file has no entry for it.
    #[must_use]
    pub fn category_slice(&self, category: TokenCategory, theme: &str) -> &Value {
        let root = self.category_root(category);
        root.get(theme)
            .or_else(|| root.get(&self.default_theme))
            .unwrap_or(&JSON_NULL)
    }

    /// Looks up a color by name, supporting nested dot notation
    /// (`primary.500`) and simple keys (`success`).
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::TokenNotFound`] with suggestions when the
    /// name does not resolve.
    pub fn get_color(&self, name: &str, theme: Option<&str>) -> Result<TokenLookup, TokenError> {
        let theme_used = self.theme_or_default(theme);
        let slice = self.category_slice(TokenCategory::Colors, &theme_used);

        match resolve(slice, name) {
            Resolution::Found { value, path } => {
                let valid = value.as_str().is_some_and(is_valid_color);
                if !valid {
                    if let Some(text) = value.as_str() {
                        tracing::warn!(
                            token = path.as_str(),
                            value = text,
                            "color value may not be a valid CSS color format"
                        );
                    }
                }
                Ok(TokenLookup {
                    value,
                    path,
                    theme: theme_used,
                    valid,
                })
            }
            Resolution::NotFound { .. } => {
                Err(self.not_found(TokenCategory::Colors, slice, name, theme_used))
            }
        }
    }

    /// Looks up a spacing token. Tries `scale.<size>`, then
    /// `semantic.<size>`, then the bare key; first hit wins.
    ///
    /// The scale-before-semantic precedence is preserved from the original
    /// system as a compatibility convention.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::TokenNotFound`] when none of the three
    /// candidate paths resolve.
    pub fn get_spacing(&self, size: &str, theme: Option<&str>) -> Result<TokenLookup, TokenError> {
        let theme_used = self.theme_or_default(theme);
        let slice = self.category_slice(TokenCategory::Spacing, &theme_used);

        let candidates = [
            format!("scale.{size}"),
            format!("semantic.{size}"),
            size.to_string(),
        ];

        for candidate in &candidates {
            if let Resolution::Found { value, path } = resolve(slice, candidate) {
                return Ok(self.css_lookup(TokenCategory::Spacing, value, path, theme_used));
            }
        }

        Err(self.not_found(TokenCategory::Spacing, slice, size, theme_used))
    }

    /// Looks up a typography property by dot-notation path
    /// (e.g. `fontSizes.base`). No multi-prefix fallback.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::TokenNotFound`] when the path does not
    /// resolve.
    pub fn get_typography(
        &self,
        property: &str,
        theme: Option<&str>,
    ) -> Result<TokenLookup, TokenError> {
        self.direct_lookup(TokenCategory::Typography, property, theme)
    }

    /// Looks up a border radius token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::TokenNotFound`] when the size does not
    /// resolve.
    pub fn get_radius(&self, size: &str, theme: Option<&str>) -> Result<TokenLookup, TokenError> {
        self.direct_lookup(TokenCategory::Radii, size, theme)
    }

    /// Looks up a shadow token. The literal value `"none"` is always
    /// treated as valid, whatever the generic CSS validator says.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::TokenNotFound`] when the size does not
    /// resolve.
    pub fn get_shadow(&self, size: &str, theme: Option<&str>) -> Result<TokenLookup, TokenError> {
        let theme_used = self.theme_or_default(theme);
        let slice = self.category_slice(TokenCategory::Shadows, &theme_used);

        match resolve(slice, size) {
            Resolution::Found { value, path } => {
                let is_none = value.as_str() == Some("none");
                let css_valid = value.as_str().is_some_and(is_valid_css_value);
                if !css_valid && !is_none {
                    if let Some(text) = value.as_str() {
                        tracing::warn!(
                            token = path.as_str(),
                            value = text,
                            "shadow value may not be a valid CSS format"
                        );
                    }
                }
                Ok(TokenLookup {
                    value,
                    path,
                    theme: theme_used,
                    valid: css_valid || is_none,
                })
            }
            Resolution::NotFound { .. } => {
                Err(self.not_found(TokenCategory::Shadows, slice, size, theme_used))
            }
        }
    }

    /// Fetches one theme's complete configuration: registry metadata plus
    /// all five token categories.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::ThemeNotFound`] when the theme registry has
    /// no entry for `theme_name`. This is distinct from an absent token
    /// within an existing theme.
    pub fn get_theme(&self, theme_name: &str) -> Result<Value, TokenError> {
        let meta = self
            .themes
            .get("themes")
            .and_then(|t| t.get(theme_name))
            .ok_or_else(|| TokenError::ThemeNotFound {
                theme: theme_name.to_string(),
            })?;

        let mut bundle = meta.clone();
        if let Some(object) = bundle.as_object_mut() {
            object.insert("tokens".to_string(), self.bundle_tokens(theme_name));
        }

        Ok(bundle)
    }

    /// All five categories for one theme, unfiltered.
    #[must_use]
    pub fn list_tokens(&self, theme: Option<&str>) -> (Value, String) {
        let theme_used = self.theme_or_default(theme);
        let tokens = self.bundle_tokens(&theme_used);
        (tokens, theme_used)
    }

    /// One category's full tree for a theme.
    #[must_use]
    pub fn list_category(&self, category: TokenCategory, theme: Option<&str>) -> (Value, String) {
        let theme_used = self.theme_or_default(theme);
        let slice = self.category_slice(category, &theme_used).clone();
        (slice, theme_used)
    }

    fn bundle_tokens(&self, theme: &str) -> Value {
        let mut bundle = serde_json::Map::new();
        for category in TokenCategory::ALL {
            bundle.insert(
                category.key().to_string(),
                self.category_slice(category, theme).clone(),
            );
        }
        Value::Object(bundle)
    }

    /// Shared path for categories with plain dot-notation lookup and the
    /// generic CSS validator.
    fn direct_lookup(
        &self,
        category: TokenCategory,
        path: &str,
        theme: Option<&str>,
    ) -> Result<TokenLookup, TokenError> {
        let theme_used = self.theme_or_default(theme);
        let slice = self.category_slice(category, &theme_used);

        match resolve(slice, path) {
            Resolution::Found { value, path } => {
                Ok(self.css_lookup(category, value, path, theme_used))
            }
            Resolution::NotFound { .. } => Err(self.not_found(category, slice, path, theme_used)),
        }
    }

    #[allow(clippy::unused_self)]
    fn css_lookup(
        &self,
        category: TokenCategory,
        value: Value,
        path: String,
        theme: String,
    ) -> TokenLookup {
        let valid = value.as_str().is_some_and(is_valid_css_value);
        if !valid {
            if let Some(text) = value.as_str() {
                tracing::warn!(
                    category = category.label(),
                    token = path.as_str(),
                    value = text,
                    "value may not be a valid CSS format"
                );
            }
        }
        TokenLookup {
            value,
            path,
            theme,
            valid,
        }
    }

    #[allow(clippy::unused_self)]
    fn not_found(
        &self,
        category: TokenCategory,
        slice: &Value,
        requested: &str,
        theme: String,
    ) -> TokenError {
        let available = available_tokens(slice, "");
        let suggestions = similar_tokens(&available, requested, MAX_SUGGESTIONS);
        let total = available.len();
        let sample: Vec<String> = available.into_iter().take(SAMPLE_SIZE).collect();

        TokenError::TokenNotFound {
            category: category.label(),
            requested: requested.to_string(),
            theme,
            suggestions,
            sample,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TokenStore {
        TokenStore::embedded("default").expect("embedded token data parses")
    }

    #[test]
    fn theme_registry_names() {
        let names = TokenStore::theme_names();
        assert!(names.contains(&"default".to_string()));
        assert!(names.contains(&"rpg_8bit".to_string()));
        assert!(TokenStore::known_theme("default"));
        assert!(!TokenStore::known_theme("vaporwave"));
    }

    #[test]
    fn embedded_data_loads() {
        let store = store();
        assert!(store.has_theme("default"));
        assert!(store.has_theme("rpg_8bit"));
        assert!(!store.has_theme("vaporwave"));
    }

    #[test]
    fn nested_color_lookup() {
        let lookup = store().get_color("primary.500", None).unwrap();
        assert_eq!(lookup.value, serde_json::json!("#3b82f6"));
        assert_eq!(lookup.path, "primary.500");
        assert_eq!(lookup.theme, "default");
        assert!(lookup.valid);
    }

    #[test]
    fn simple_color_lookup() {
        let lookup = store().get_color("success", None).unwrap();
        assert_eq!(lookup.value, serde_json::json!("#22c55e"));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let lookup = store().get_color("success", Some("vaporwave")).unwrap();
        assert_eq!(lookup.theme, "default");
    }

    #[test]
    fn retro_theme_is_used_when_present() {
        let lookup = store().get_color("success", Some("rpg_8bit")).unwrap();
        assert_eq!(lookup.theme, "rpg_8bit");
        assert_eq!(lookup.value, serde_json::json!("#92cc41"));
    }

    #[test]
    fn missing_color_yields_structured_error() {
        let err = store().get_color("primry.500", None).unwrap_err();
        let TokenError::TokenNotFound {
            category,
            requested,
            theme,
            suggestions,
            sample,
            total,
        } = err
        else {
            panic!("expected TokenNotFound");
        };
        assert_eq!(category, "Color");
        assert_eq!(requested, "primry.500");
        assert_eq!(theme, "default");
        assert!(suggestions.contains(&"primary.500".to_string()));
        assert!(suggestions.len() <= 3);
        assert!(sample.len() <= 10);
        assert!(total >= sample.len());
    }

    #[test]
    fn spacing_prefers_scale_over_semantic() {
        let lookup = store().get_spacing("4", None).unwrap();
        assert_eq!(lookup.path, "scale.4");
        assert_eq!(lookup.value, serde_json::json!("1rem"));
    }

    #[test]
    fn spacing_falls_through_to_semantic() {
        let lookup = store().get_spacing("md", None).unwrap();
        assert_eq!(lookup.path, "semantic.md");
        assert_eq!(lookup.value, serde_json::json!("1rem"));
    }

    #[test]
    fn spacing_miss_tries_all_three_paths() {
        let err = store().get_spacing("xyz", None).unwrap_err();
        assert!(matches!(err, TokenError::TokenNotFound { .. }));
    }

    #[test]
    fn typography_is_direct_lookup_only() {
        let lookup = store().get_typography("fontSizes.base", None).unwrap();
        assert_eq!(lookup.value, serde_json::json!("1rem"));
        assert!(lookup.valid);

        // No scale/semantic fallback for typography.
        assert!(store().get_typography("base", None).is_err());
    }

    #[test]
    fn radius_lookup() {
        let lookup = store().get_radius("md", None).unwrap();
        assert_eq!(lookup.value, serde_json::json!("0.375rem"));
    }

    #[test]
    fn shadow_none_is_always_valid() {
        let lookup = store().get_shadow("none", None).unwrap();
        assert_eq!(lookup.value, serde_json::json!("none"));
        assert!(lookup.valid);
    }

    #[test]
    fn get_theme_bundles_all_categories() {
        let bundle = store().get_theme("rpg_8bit").unwrap();
        assert_eq!(bundle["label"], "RPG 8-bit");
        for key in ["colors", "spacing", "typography", "radii", "shadows"] {
            assert!(bundle["tokens"][key].is_object(), "missing {key}");
        }
    }

    #[test]
    fn get_theme_rejects_unknown_theme() {
        let err = store().get_theme("vaporwave").unwrap_err();
        assert_eq!(
            err,
            TokenError::ThemeNotFound {
                theme: "vaporwave".to_string()
            }
        );
    }

    #[test]
    fn list_tokens_reports_theme_used() {
        let (tokens, theme) = store().list_tokens(Some("nonexistent"));
        assert_eq!(theme, "default");
        assert!(tokens["colors"].is_object());
    }

    #[test]
    fn enumeration_matches_resolution() {
        let store = store();
        for category in TokenCategory::ALL {
            let slice = store.category_slice(category, "default");
            for path in available_tokens(slice, "") {
                let resolution = resolve(slice, &path);
                assert!(resolution.is_found(), "{path} must resolve");
                let value = resolution.value().unwrap();
                assert!(!value.is_object(), "{path} must be a scalar leaf");
            }
        }
    }
}
