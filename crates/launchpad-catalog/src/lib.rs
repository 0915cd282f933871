//! launchpad-catalog: App catalog, search and activation for Launchpad.
//!
//! Provides the window-independent half of the launcher:
//! - Catalog loading from `apps.json` with icon resolution against a default icon
//! - Case-insensitive search projection over categories and apps
//! - Selection/search state for the two-pane view
//! - Activation of executables and URIs with typed errors

mod catalog;
mod error;
mod filter;
mod icons;
mod launch;
mod model;
mod paths;
mod view;

pub use catalog::{load, load_catalog, parse};
pub use error::{CatalogError, LaunchError};
pub use filter::{FilteredView, filter};
pub use icons::IconResolver;
pub use launch::{EXECUTABLE_EXTENSION, LaunchTarget, Launched, Opener, SystemOpener, activate};
pub use model::{AppItem, Catalog, Category};
pub use paths::{CATALOG_FILE, LauncherPaths};
pub use view::LauncherView;
