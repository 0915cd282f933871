//! Catalog loading.

use crate::error::CatalogError;
use crate::icons::IconResolver;
use crate::model::{AppItem, Catalog, Category, RawAppItem, RawCatalog, RawCategory};
use crate::paths::LauncherPaths;
use log::info;

use std::fs;
use std::path::Path;

/// Load the catalog at the standard location under `paths`.
pub fn load_catalog(paths: &LauncherPaths) -> Result<Catalog, CatalogError> {
    load(&paths.catalog_file, &IconResolver::from_paths(paths))
}

/// Read and parse a catalog file, resolving every icon reference.
///
/// A missing file is an empty catalog, not an error.
pub fn load(catalog_path: &Path, icons: &IconResolver) -> Result<Catalog, CatalogError> {
    if !catalog_path.exists() {
        info!("No catalog at {:?}, starting empty", catalog_path);
        return Ok(Catalog::default());
    }

    let json = fs::read_to_string(catalog_path).map_err(|source| CatalogError::Io {
        path: catalog_path.to_path_buf(),
        source,
    })?;

    let catalog = parse(&json, icons).map_err(|source| CatalogError::Parse {
        path: catalog_path.to_path_buf(),
        source,
    })?;

    info!(
        "Loaded {} categories ({} apps) from {:?}",
        catalog.categories.len(),
        catalog.app_count(),
        catalog_path
    );

    Ok(catalog)
}

/// Parse catalog JSON without touching the catalog file itself.
pub fn parse(json: &str, icons: &IconResolver) -> Result<Catalog, serde_json::Error> {
    let raw: RawCatalog = serde_json::from_str(json)?;

    let categories = raw
        .categories
        .unwrap_or_default()
        .into_iter()
        .map(|category| resolve_category(category, icons))
        .collect();

    Ok(Catalog::new(categories))
}

fn resolve_category(raw: RawCategory, icons: &IconResolver) -> Category {
    Category {
        name: raw.name.unwrap_or_default(),
        icon: icons.resolve(raw.icon.as_deref()),
        apps: raw
            .apps
            .unwrap_or_default()
            .into_iter()
            .map(|app| resolve_app(app, icons))
            .collect(),
    }
}

fn resolve_app(raw: RawAppItem, icons: &IconResolver) -> AppItem {
    AppItem {
        name: raw.name.unwrap_or_default(),
        icon: icons.resolve(raw.icon.as_deref()),
        path: raw.path,
        description: raw.description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE: &str = r#"{
        "categories": [
            {
                "name": "Dev",
                "icon": "icons/dev.png",
                "apps": [
                    { "name": "Editor", "icon": null, "path": "C:\\Tools\\editor.exe", "description": "Text editor" },
                    { "name": "Terminal", "icon": "icons/missing.png", "path": null, "description": null }
                ]
            },
            { "name": "Games", "icon": null, "apps": [ { "name": "Chess" } ] }
        ]
    }"#;

    fn fixture(json: Option<&str>, with_default: bool) -> (tempfile::TempDir, LauncherPaths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = LauncherPaths::from_base_dir(dir.path());
        fs::create_dir_all(dir.path().join("icons")).unwrap();
        if with_default {
            fs::write(&paths.default_icon, b"ico").unwrap();
        }
        if let Some(json) = json {
            fs::write(&paths.catalog_file, json).unwrap();
        }
        (dir, paths)
    }

    #[test]
    fn test_missing_file_is_empty_catalog() {
        let (_dir, paths) = fixture(None, true);

        let catalog = load_catalog(&paths).unwrap();

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let (_dir, paths) = fixture(Some("{ \"categories\": [ { \"name\": "), false);

        let err = load_catalog(&paths).unwrap_err();

        match err {
            CatalogError::Parse { path, .. } => assert_eq!(path, paths.catalog_file),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let (_dir, paths) = fixture(Some(r#"{ "categories": "nope" }"#), false);

        assert!(matches!(
            load_catalog(&paths),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_preserves_order_and_fields() {
        let (_dir, paths) = fixture(Some(SAMPLE), false);

        let catalog = load_catalog(&paths).unwrap();

        let names: Vec<_> = catalog.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Dev", "Games"]);

        let dev = &catalog.categories[0];
        let apps: Vec<_> = dev.apps.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(apps, ["Editor", "Terminal"]);
        assert_eq!(dev.apps[0].path.as_deref(), Some("C:\\Tools\\editor.exe"));
        assert_eq!(dev.apps[0].description.as_deref(), Some("Text editor"));
        assert_eq!(dev.apps[1].path, None);
        assert_eq!(catalog.app_count(), 3);
    }

    #[test]
    fn test_load_resolves_icons() {
        let (dir, paths) = fixture(Some(SAMPLE), true);
        fs::write(dir.path().join("icons").join("dev.png"), b"png").unwrap();

        let catalog = load_catalog(&paths).unwrap();

        let dev = &catalog.categories[0];
        assert_eq!(dev.icon, Some(dir.path().join("icons").join("dev.png")));
        assert_eq!(dev.apps[0].icon, Some(paths.default_icon.clone()));
        assert_eq!(dev.apps[1].icon, Some(paths.default_icon.clone()));
        assert_eq!(catalog.categories[1].icon, Some(paths.default_icon.clone()));
    }

    #[test]
    fn test_null_collections_are_empty() {
        let (_dir, paths) = fixture(
            Some(r#"{ "categories": [ { "name": "Empty", "apps": null } ] }"#),
            false,
        );

        let catalog = load_catalog(&paths).unwrap();
        assert_eq!(catalog.categories.len(), 1);
        assert!(catalog.categories[0].apps.is_empty());

        let icons = IconResolver::from_paths(&paths);
        assert!(parse(r#"{ "categories": null }"#, &icons).unwrap().is_empty());
    }
}
