//! Launchpad - two-pane launcher for categorized shortcuts.
//!
//! Loads `apps.json` next to the executable once, then filters it on every
//! keystroke and launches the chosen app or URI.

mod event_bus;
mod panels;
mod services;

use launchpad_catalog::{Catalog, LauncherPaths, load_catalog};
use log::{error, info};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Launchpad...");

    let paths = LauncherPaths::discover()?;
    info!("Base directory: {:?}", paths.base_dir);

    let (catalog, status) = match load_catalog(&paths) {
        Ok(catalog) if catalog.is_empty() => {
            let status = format!("No apps found in {}", paths.catalog_file.display());
            (catalog, status)
        }
        Ok(catalog) => (catalog, String::new()),
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            (Catalog::default(), e.to_string())
        }
    };

    panels::launcher::run_launcher(catalog, status)
}
