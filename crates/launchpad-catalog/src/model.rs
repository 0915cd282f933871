//! Catalog data model.
//!
//! `Raw*` records mirror the JSON file. The loader maps them into the
//! resolved records below, which are what the rest of the launcher sees.

use serde::Deserialize;
use std::path::PathBuf;

/// A launchable shortcut.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppItem {
    pub name: String,
    /// Resolved icon file, if any exists.
    pub icon: Option<PathBuf>,
    /// Executable path or URI.
    pub path: Option<String>,
    pub description: Option<String>,
}

/// A named group of shortcuts, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub icon: Option<PathBuf>,
    pub apps: Vec<AppItem>,
}

/// Everything loaded from the catalog file. Read-only after load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of apps across all categories.
    pub fn app_count(&self) -> usize {
        self.categories.iter().map(|c| c.apps.len()).sum()
    }
}

/// Top-level object of `apps.json`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawCatalog {
    #[serde(default)]
    pub categories: Option<Vec<RawCategory>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCategory {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub apps: Option<Vec<RawAppItem>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAppItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
