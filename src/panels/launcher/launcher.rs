//! Launcher window.
//!
//! View state lives on the UI thread; every change rebuilds the Slint
//! models from a fresh snapshot. Launch results arrive over the event bus
//! and are picked up by a single polling Timer.

use launchpad_catalog::{AppItem, Catalog, Category, LauncherView};
use log::debug;
use slint::{ComponentHandle, ModelRc, VecModel};
use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use super::IconCache;
use super::events;
use crate::services::activation;

slint::include_modules!();

/// Polling interval for the event bus Timer.
const EVENT_POLL_INTERVAL_MS: u64 = 50;

pub fn run_launcher(catalog: Catalog, status: String) -> Result<(), Box<dyn Error>> {
    let ui = LauncherWindow::new()?;
    let view = Rc::new(RefCell::new(LauncherView::new(Arc::new(catalog))));
    let icons = Rc::new(IconCache::default());

    ui.set_status(status.into());
    refresh_all(&ui, &view.borrow(), &icons);

    // Search box
    let ui_weak = ui.as_weak();
    let (search_view, search_icons) = (view.clone(), icons.clone());
    ui.on_search_changed(move |text| {
        let Some(ui) = ui_weak.upgrade() else {
            return;
        };
        let mut view = search_view.borrow_mut();
        view.set_query(&text);
        debug!(
            "Query {:?} (searching: {}): {} categories, {} apps",
            view.query(),
            view.is_searching(),
            view.categories().len(),
            view.detail().len()
        );

        ui.set_selected_category(selection_index(view.selected_category()));
        ui.set_selected_app(-1);
        refresh_all(&ui, &view, &search_icons);
    });

    // Category list
    let ui_weak = ui.as_weak();
    let (select_view, select_icons) = (view.clone(), icons.clone());
    ui.on_category_selected(move |index| {
        let Some(ui) = ui_weak.upgrade() else {
            return;
        };
        let mut view = select_view.borrow_mut();
        view.select_category(usize::try_from(index).ok());

        ui.set_selected_category(selection_index(view.selected_category()));
        ui.set_selected_app(-1);
        refresh_apps(&ui, &view, &select_icons);
    });

    // App list
    let ui_weak = ui.as_weak();
    let activate_view = view.clone();
    ui.on_app_activated(move |row| {
        let item = usize::try_from(row)
            .ok()
            .and_then(|row| activate_view.borrow().item_at(row).cloned());
        let Some(item) = item else {
            return;
        };

        if let Some(ui) = ui_weak.upgrade() {
            ui.set_status(format!("Launching {}...", item.name).into());
        }
        activation::launch_in_background(item);
    });

    // Event polling timer
    let mut event_rx = events::subscribe();
    let ui_weak_events = ui.as_weak();
    let event_timer = slint::Timer::default();
    event_timer.start(
        slint::TimerMode::Repeated,
        Duration::from_millis(EVENT_POLL_INTERVAL_MS),
        move || {
            let events = events::drain(&mut event_rx);
            let Some(latest) = events.last() else {
                return;
            };
            if let Some(ui) = ui_weak_events.upgrade() {
                ui.set_status(latest.status_text().into());
            }
        },
    );

    ui.run()?;

    Ok(())
}

/// Slint list selection index, `-1` for none.
fn selection_index(selected: Option<usize>) -> i32 {
    selected
        .and_then(|i| i32::try_from(i).ok())
        .unwrap_or(-1)
}

fn refresh_all(ui: &LauncherWindow, view: &LauncherView, icons: &IconCache) {
    let rows: Vec<CategoryRow> = view
        .categories()
        .iter()
        .map(|category| category_row(category, icons))
        .collect();
    ui.set_categories(ModelRc::new(VecModel::from(rows)));

    refresh_apps(ui, view, icons);
}

fn refresh_apps(ui: &LauncherWindow, view: &LauncherView, icons: &IconCache) {
    let rows: Vec<AppRow> = view.detail().iter().map(|app| app_row(app, icons)).collect();
    ui.set_apps(ModelRc::new(VecModel::from(rows)));
}

fn category_row(category: &Category, icons: &IconCache) -> CategoryRow {
    let icon = category.icon.as_deref().and_then(|path| icons.get(path));

    CategoryRow {
        name: category.name.as_str().into(),
        has_icon: icon.is_some(),
        icon: icon.unwrap_or_default(),
        app_count: i32::try_from(category.apps.len()).unwrap_or(i32::MAX),
    }
}

fn app_row(app: &AppItem, icons: &IconCache) -> AppRow {
    let icon = app.icon.as_deref().and_then(|path| icons.get(path));

    AppRow {
        name: app.name.as_str().into(),
        description: app.description.as_deref().unwrap_or_default().into(),
        has_icon: icon.is_some(),
        icon: icon.unwrap_or_default(),
    }
}
