//! Category + free-text filtering over the menu catalog.
//!
//! The visible menu is the ordered subsequence of the catalog whose items pass
//! both predicates:
//! - category: `All`, or the item's category equals the selection;
//! - search: the item's name or description contains the query, ignoring case.
//!   The empty query matches everything.
//!
//! An empty result is a normal state (the view shows a hint), not an error.

use std::collections::HashSet;
use std::fmt;

use super::catalog::MenuItem;

/// Label of the catch-all category.
pub const ALL_LABEL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// `"all"` maps to `All`; anything else is taken as a category name.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Category::All
        } else {
            Category::Named(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::All => ALL_LABEL,
            Category::Named(name) => name,
        }
    }

    pub fn admits(&self, item: &MenuItem) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => item.category == *name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distinct catalog categories in first-seen order, prefixed with `All`.
pub fn categories(items: &[MenuItem]) -> Vec<Category> {
    let mut seen = HashSet::new();
    let mut out = vec![Category::All];
    for item in items {
        if seen.insert(item.category.as_str()) {
            out.push(Category::Named(item.category.clone()));
        }
    }
    out
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    pub category: Category,
    pub search: String,
}

impl MenuFilter {
    pub fn new(category: Category, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        self.category.admits(item) && matches_search(item, &self.search.to_lowercase())
    }

    /// Items passing both predicates, in catalog order.
    pub fn apply<'a>(&self, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        let needle = self.search.to_lowercase();
        items
            .iter()
            .filter(|item| self.category.admits(item) && matches_search(item, &needle))
            .collect()
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

fn matches_search(item: &MenuItem, needle: &str) -> bool {
    needle.is_empty()
        || item.name.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, description: &str, category: &str) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price: "$1.00".into(),
            image: String::new(),
            category: category.into(),
            tags: Vec::new(),
        }
    }

    fn sample() -> Vec<MenuItem> {
        vec![
            item("a", "Flat White", "Velvety microfoam over a double shot.", "coffee"),
            item("b", "Earl Grey", "Bergamot black tea.", "tea"),
            item("c", "Mocha", "Espresso, cocoa and STEAMED milk.", "coffee"),
            item("d", "Scone", "Served with clotted cream.", "pastries"),
        ]
    }

    fn ids(items: Vec<&MenuItem>) -> Vec<&str> {
        items.into_iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn default_filter_shows_everything_in_order() {
        let items = sample();
        let filter = MenuFilter::default();
        assert!(filter.is_default());
        assert_eq!(ids(filter.apply(&items)), ["a", "b", "c", "d"]);
    }

    #[test]
    fn category_predicate() {
        let items = sample();
        let filter = MenuFilter::new(Category::from_label("coffee"), "");
        assert_eq!(ids(filter.apply(&items)), ["a", "c"]);

        let unknown = MenuFilter::new(Category::from_label("smoothies"), "");
        assert!(unknown.apply(&items).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let items = sample();
        assert_eq!(ids(MenuFilter::new(Category::All, "MOCHA").apply(&items)), ["c"]);
        assert_eq!(ids(MenuFilter::new(Category::All, "steamed").apply(&items)), ["c"]);
        assert_eq!(ids(MenuFilter::new(Category::All, "cream").apply(&items)), ["d"]);
    }

    #[test]
    fn search_is_not_trimmed() {
        let items = sample();
        // Substring semantics: the leading space must be present in the text.
        assert_eq!(ids(MenuFilter::new(Category::All, " tea").apply(&items)), ["b"]);
        assert!(MenuFilter::new(Category::All, "tea ").apply(&items).is_empty());
    }

    #[test]
    fn conflicting_predicates_yield_nothing() {
        let items = sample();
        let filter = MenuFilter::new(Category::from_label("tea"), "scone");
        assert!(filter.apply(&items).is_empty());
    }

    #[test]
    fn matches_agrees_with_apply() {
        let items = sample();
        let filter = MenuFilter::new(Category::from_label("coffee"), "shot");
        let applied = ids(filter.apply(&items));
        let matched: Vec<_> = items
            .iter()
            .filter(|i| filter.matches(i))
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(applied, matched);
        assert_eq!(applied, ["a"]);
    }

    #[test]
    fn categories_are_distinct_first_seen_and_prefixed() {
        let cats = categories(&sample());
        let labels: Vec<_> = cats.iter().map(Category::label).collect();
        assert_eq!(labels, ["all", "coffee", "tea", "pastries"]);
        assert_eq!(categories(&[]), vec![Category::All]);
    }

    #[test]
    fn label_round_trips_through_from_label() {
        for cat in categories(&sample()) {
            assert_eq!(Category::from_label(cat.label()), cat);
            assert_eq!(cat.to_string(), cat.label());
        }
    }
}
