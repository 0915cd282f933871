//! Background services for Launchpad.
//!
//! - `activation` - Launch apps off the UI thread and report the result

pub mod activation;
