//! Event bus for cross-thread communication.
//!
//! Background work (app launches) reports back over a tokio broadcast
//! channel. The window drains it from a single polling Timer, so all UI
//! updates stay on the UI thread.
//!
//! Each panel defines its own event types in its events.rs module.

use tokio::sync::broadcast::{Receiver, error::TryRecvError};

/// Broadcast channel capacity.
/// Launch results are rare; lagging receivers only lose stale status text.
pub const CHANNEL_CAPACITY: usize = 16;

/// Drain every pending event from a receiver without blocking.
/// Handles `Lagged` by continuing to drain.
pub fn drain<T: Clone>(rx: &mut Receiver<T>) -> Vec<T> {
    let mut events = Vec::new();

    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Lagged(_)) => continue,
            Err(TryRecvError::Closed) => break,
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast;

    #[test]
    fn test_drain_returns_all_pending_in_order() {
        let (tx, mut rx) = broadcast::channel(CHANNEL_CAPACITY);
        tx.send(1).unwrap();
        tx.send(2).unwrap();
        tx.send(3).unwrap();

        assert_eq!(drain(&mut rx), vec![1, 2, 3]);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_drain_skips_lagged() {
        let (tx, mut rx) = broadcast::channel(2);
        for i in 0..5 {
            tx.send(i).unwrap();
        }

        assert_eq!(drain(&mut rx), vec![3, 4]);
    }
}
