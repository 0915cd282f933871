//! Launcher event definitions and broadcast event bus.

use crate::event_bus::{self, CHANNEL_CAPACITY};
use std::sync::OnceLock;
use tokio::sync::broadcast::{self, Receiver, Sender};

/// Results reported back to the launcher window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LauncherEvent {
    Launched { name: String },
    LaunchFailed { name: String, message: String },
}

impl LauncherEvent {
    /// Text for the window's status line.
    pub fn status_text(&self) -> String {
        match self {
            LauncherEvent::Launched { name } => format!("Launched {name}"),
            LauncherEvent::LaunchFailed { name, message } => {
                format!("Could not launch {name}: {message}")
            }
        }
    }
}

// Static broadcast sender - subscribers get their own receiver via subscribe()
static LAUNCHER_SENDER: OnceLock<Sender<LauncherEvent>> = OnceLock::new();

fn get_sender() -> &'static Sender<LauncherEvent> {
    LAUNCHER_SENDER.get_or_init(|| {
        let (tx, _rx) = broadcast::channel(CHANNEL_CAPACITY);
        tx
    })
}

/// Send an event to the window. Non-blocking.
/// If no receivers, the event is dropped.
#[inline]
pub fn send(event: LauncherEvent) {
    let _ = get_sender().send(event);
}

#[inline]
pub fn send_launched(name: String) {
    send(LauncherEvent::Launched { name });
}

#[inline]
pub fn send_launch_failed(name: String, message: String) {
    send(LauncherEvent::LaunchFailed { name, message });
}

/// Subscribe to the event bus.
pub fn subscribe() -> Receiver<LauncherEvent> {
    get_sender().subscribe()
}

/// Drain all pending events from a receiver.
#[inline]
pub fn drain(rx: &mut Receiver<LauncherEvent>) -> Vec<LauncherEvent> {
    event_bus::drain(rx)
}
