//! The compiled-in menu catalog.

use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Tag that earns an item the highlighted badge on its card.
pub const BESTSELLER_TAG: &str = "bestseller";

const CATALOG_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/menu.json"
));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display-ready price, currency symbol included.
    pub price: String,
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl MenuItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_bestseller(&self) -> bool {
        self.has_tag(BESTSELLER_TAG)
    }
}

static CATALOG: Lazy<Vec<MenuItem>> = Lazy::new(|| match parse_catalog(CATALOG_JSON) {
    Ok(items) => items,
    Err(err) => {
        warn!("embedded menu catalog is invalid ({err}); rendering an empty menu");
        Vec::new()
    }
});

/// The embedded catalog, parsed on first use. Order is menu order.
pub fn catalog() -> &'static [MenuItem] {
    &CATALOG
}

pub fn parse_catalog(raw: &str) -> Result<Vec<MenuItem>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_catalog_parses() {
        let items = catalog();
        assert_eq!(items.len(), 8);
        assert_eq!(items[0].name, "Signature Bloom Latte");
        assert_eq!(items[7].name, "Chocolate Hazelnut Tart");
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn missing_tags_default_to_empty() {
        let cold_brew = catalog()
            .iter()
            .find(|item| item.name == "Cold Brew")
            .expect("cold brew in catalog");
        assert!(cold_brew.tags.is_empty());
        assert!(!cold_brew.is_bestseller());
    }

    #[test]
    fn bestseller_badge_follows_tag() {
        let bestsellers: Vec<_> = catalog()
            .iter()
            .filter(|item| item.is_bestseller())
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(bestsellers, ["Signature Bloom Latte", "Almond Croissant"]);
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(parse_catalog("[{\"id\": \"1\"}]").is_err());
        assert!(parse_catalog("not json").is_err());
        assert_eq!(parse_catalog("[]").unwrap(), Vec::<MenuItem>::new());
    }
}
