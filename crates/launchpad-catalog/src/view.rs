//! Selection and search state behind the two-pane window.

use crate::filter::{FilteredView, filter};
use crate::model::{AppItem, Catalog, Category};
use std::sync::Arc;

/// What the category list and the detail pane currently show.
///
/// Search and category selection both drive the detail pane; whenever the
/// query is non-blank the search wins.
pub struct LauncherView {
    catalog: Arc<Catalog>,
    query: String,
    filtered: FilteredView,
    selected: Option<usize>,
}

impl LauncherView {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let filtered = filter(&catalog, "");
        Self {
            catalog,
            query: String::new(),
            filtered,
            selected: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        self.filtered.searching
    }

    /// Replace the query and rebuild the view from scratch.
    /// The category list is replaced, so any selection is dropped.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.filtered = filter(&self.catalog, query);
        self.selected = None;
    }

    /// Select a row of the category list. Out-of-range rows clear the selection.
    pub fn select_category(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.filtered.categories.len());
    }

    pub fn selected_category(&self) -> Option<usize> {
        self.selected
    }

    /// Categories for the left pane.
    pub fn categories(&self) -> &[Category] {
        &self.filtered.categories
    }

    /// Apps for the right pane.
    pub fn detail(&self) -> &[AppItem] {
        if self.filtered.searching {
            return &self.filtered.matches;
        }

        self.selected
            .and_then(|i| self.filtered.categories.get(i))
            .map(|c| c.apps.as_slice())
            .unwrap_or(&[])
    }

    /// The app shown at `row` of the detail pane.
    pub fn item_at(&self, row: usize) -> Option<&AppItem> {
        self.detail().get(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<Catalog> {
        let app = |name: &str| AppItem {
            name: name.to_string(),
            ..AppItem::default()
        };
        Arc::new(Catalog::new(vec![
            Category {
                name: "Dev".into(),
                icon: None,
                apps: vec![app("Editor"), app("Terminal")],
            },
            Category {
                name: "Games".into(),
                icon: None,
                apps: vec![app("Chess")],
            },
        ]))
    }

    fn detail_names(view: &LauncherView) -> Vec<&str> {
        view.detail().iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let view = LauncherView::new(catalog());

        assert_eq!(view.categories().len(), 2);
        assert!(view.detail().is_empty());
        assert!(!view.is_searching());
        assert_eq!(view.selected_category(), None);
    }

    #[test]
    fn test_selection_shows_full_category() {
        let mut view = LauncherView::new(catalog());

        view.select_category(Some(0));

        assert_eq!(detail_names(&view), ["Editor", "Terminal"]);
        assert_eq!(view.item_at(1).map(|a| a.name.as_str()), Some("Terminal"));
        assert!(view.item_at(2).is_none());
    }

    #[test]
    fn test_out_of_range_selection_clears() {
        let mut view = LauncherView::new(catalog());
        view.select_category(Some(0));

        view.select_category(Some(7));

        assert_eq!(view.selected_category(), None);
        assert!(view.detail().is_empty());
    }

    #[test]
    fn test_search_takes_precedence_over_selection() {
        let mut view = LauncherView::new(catalog());

        view.set_query("ch");
        view.select_category(Some(0));

        assert_eq!(view.categories().len(), 1);
        assert_eq!(view.selected_category(), Some(0));
        assert_eq!(detail_names(&view), ["Chess"]);
    }

    #[test]
    fn test_query_change_clears_selection() {
        let mut view = LauncherView::new(catalog());
        view.select_category(Some(1));

        view.set_query("e");
        assert_eq!(view.selected_category(), None);
        assert_eq!(detail_names(&view), ["Editor", "Terminal", "Chess"]);

        view.set_query("  ");
        assert!(!view.is_searching());
        assert_eq!(view.selected_category(), None);
        assert!(view.detail().is_empty());
        assert_eq!(view.categories(), catalog().categories.as_slice());
    }
}
