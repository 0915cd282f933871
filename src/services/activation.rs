//! App activation service.
//!
//! Launching can block (URI handlers are external programs), so each
//! activation runs on its own short-lived thread and reports back through
//! the launcher event bus.

use crate::panels::launcher::events;
use launchpad_catalog::{AppItem, LaunchError, Launched, SystemOpener, activate};
use log::{info, warn};
use std::thread;

/// Launch `item` without blocking the caller.
pub fn launch_in_background(item: AppItem) {
    info!("Activating \"{}\"", item.name);

    thread::spawn(move || {
        let result = activate(&item, &SystemOpener);
        report(&item, result);
    });
}

fn report(item: &AppItem, result: Result<Launched, LaunchError>) {
    match result {
        Ok(_) => events::send_launched(item.name.clone()),
        Err(e) => {
            warn!("Failed to launch \"{}\": {}", item.name, e);
            events::send_launch_failed(item.name.clone(), e.to_string());
        }
    }
}
