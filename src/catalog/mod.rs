//! Static UI component catalogs.
//!
//! Each catalog is a read-only list of component descriptors for one
//! library (shadcn/ui, Magic UI, Aceternity UI, 8bitcn, custom). The data
//! lives in static arrays; operations are name lookup, category filter,
//! and case-insensitive keyword search.

mod aceternity;
mod custom;
mod eightbit;
mod magicui;
mod shadcn;

pub use aceternity::ACETERNITY_COMPONENTS;
pub use custom::CUSTOM_COMPONENTS;
pub use eightbit::EIGHTBIT_COMPONENTS;
pub use magicui::MAGICUI_COMPONENTS;
pub use shadcn::SHADCN_COMPONENTS;

use serde::Serialize;

/// A component descriptor in a catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Component {
    /// Kebab-case component name.
    pub name: &'static str,
    /// Category within the library.
    pub category: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Extended usage context, where the library documents it.
    #[serde(flatten)]
    pub context: Option<ComponentContext>,
}

/// Usage guidance attached to a component.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentContext {
    /// Typical use cases.
    pub use_cases: &'static [&'static str],
    /// Situations where the component fits.
    pub when_to_use: &'static [&'static str],
    /// Situations where it does not.
    pub when_not_to_use: &'static [&'static str],
    /// Names of related components in the same library.
    pub related_components: &'static [&'static str],
}

impl Component {
    /// Whether any searchable field contains `query` (already lowercased).
    fn matches(&self, query: &str) -> bool {
        if self.name.to_lowercase().contains(query)
            || self.category.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
        {
            return true;
        }
        self.context.is_some_and(|context| {
            context
                .use_cases
                .iter()
                .chain(context.when_to_use)
                .chain(context.when_not_to_use)
                .any(|field| field.to_lowercase().contains(query))
        })
    }
}

/// Shorthand constructor for plain catalog entries.
pub(crate) const fn entry(
    name: &'static str,
    category: &'static str,
    description: &'static str,
) -> Component {
    Component {
        name,
        category,
        description,
        context: None,
    }
}

/// A read-only component catalog.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    components: &'static [Component],
}

impl Catalog {
    /// Wraps a static component list.
    #[must_use]
    pub const fn new(components: &'static [Component]) -> Self {
        Self { components }
    }

    /// Number of components in the catalog.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the catalog is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterates over all components.
    pub fn iter(&self) -> impl Iterator<Item = &'static Component> {
        self.components.iter()
    }

    /// Looks up a component by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static Component> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Components in a category, or all components when no filter is
    /// given.
    #[must_use]
    pub fn by_category(&self, category: Option<&str>) -> Vec<&'static Component> {
        match category {
            Some(filter) => self
                .components
                .iter()
                .filter(|c| c.category == filter)
                .collect(),
            None => self.components.iter().collect(),
        }
    }

    /// Case-insensitive substring search over name, category,
    /// description, and any attached usage context.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&'static Component> {
        let query = query.to_lowercase();
        self.components
            .iter()
            .filter(|c| c.matches(&query))
            .collect()
    }

    /// Distinct categories, in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for component in self.components {
            if !seen.contains(&component.category) {
                seen.push(component.category);
            }
        }
        seen
    }
}

/// Converts a kebab-case component name to a display name
/// ("dropdown-menu" -> "Dropdown Menu").
#[must_use]
pub fn display_name(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURES: &[Component] = &[
        entry("button", "form", "Displays a button"),
        entry("card", "layout", "Displays a card"),
        entry("dialog", "overlay", "A modal window"),
        entry("input", "form", "A form input field"),
    ];

    #[test]
    fn get_finds_exact_name() {
        let catalog = Catalog::new(FIXTURES);
        assert_eq!(catalog.get("card").unwrap().category, "layout");
        assert!(catalog.get("carousel").is_none());
    }

    #[test]
    fn category_filter() {
        let catalog = Catalog::new(FIXTURES);
        assert_eq!(catalog.by_category(Some("form")).len(), 2);
        assert_eq!(catalog.by_category(None).len(), 4);
        assert!(catalog.by_category(Some("nope")).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_all_fields() {
        let catalog = Catalog::new(FIXTURES);
        assert_eq!(catalog.search("BUTTON").len(), 1);
        assert_eq!(catalog.search("modal").len(), 1);
        assert_eq!(catalog.search("form").len(), 2);
    }

    #[test]
    fn search_covers_context_fields() {
        let results = Catalog::new(EIGHTBIT_COMPONENTS).search("battle ui");
        assert!(results.iter().any(|c| c.name == "health-bar"));
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let catalog = Catalog::new(FIXTURES);
        assert_eq!(catalog.categories(), vec!["form", "layout", "overlay"]);
    }

    #[test]
    fn display_name_title_cases_kebab() {
        assert_eq!(display_name("dropdown-menu"), "Dropdown Menu");
        assert_eq!(display_name("button"), "Button");
        assert_eq!(display_name("input-otp"), "Input Otp");
    }

    #[test]
    fn shipped_catalogs_are_populated() {
        assert!(!Catalog::new(SHADCN_COMPONENTS).is_empty());
        assert!(!Catalog::new(MAGICUI_COMPONENTS).is_empty());
        assert!(!Catalog::new(ACETERNITY_COMPONENTS).is_empty());
        assert!(!Catalog::new(EIGHTBIT_COMPONENTS).is_empty());
        assert!(!Catalog::new(CUSTOM_COMPONENTS).is_empty());
    }

    #[test]
    fn context_catalogs_carry_context() {
        for component in Catalog::new(EIGHTBIT_COMPONENTS).iter() {
            assert!(component.context.is_some(), "{} lacks context", component.name);
        }
        for component in Catalog::new(ACETERNITY_COMPONENTS).iter() {
            assert!(component.context.is_some(), "{} lacks context", component.name);
        }
    }
}
