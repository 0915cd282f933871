//! Search filtering over the catalog.

use crate::model::{AppItem, Catalog, Category};

/// Snapshot of the catalog as seen through a search query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredView {
    /// Categories to list. With no active search this is the whole catalog.
    pub categories: Vec<Category>,
    /// Every matching app in category-then-item order. Empty when no search
    /// is active.
    pub matches: Vec<AppItem>,
    /// Whether a non-blank query produced this view.
    pub searching: bool,
}

/// Project `catalog` through `query`.
///
/// Matching is a case-insensitive substring test on app and category names.
/// A blank query returns the catalog unchanged.
pub fn filter(catalog: &Catalog, query: &str) -> FilteredView {
    if query.trim().is_empty() {
        return FilteredView {
            categories: catalog.categories.clone(),
            matches: Vec::new(),
            searching: false,
        };
    }

    let needle = query.to_lowercase();
    let mut categories = Vec::new();
    let mut matches = Vec::new();

    for category in &catalog.categories {
        let apps: Vec<AppItem> = category
            .apps
            .iter()
            .filter(|app| contains_ignore_case(&app.name, &needle))
            .cloned()
            .collect();

        if !apps.is_empty() || contains_ignore_case(&category.name, &needle) {
            categories.push(Category {
                name: category.name.clone(),
                icon: category.icon.clone(),
                apps: apps.clone(),
            });
        }

        matches.extend(apps);
    }

    FilteredView {
        categories,
        matches,
        searching: true,
    }
}

/// `needle` must already be lowercase.
#[inline]
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
