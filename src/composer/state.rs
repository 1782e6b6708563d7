use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::domain::SpamStatus;

/// Identifies one send. Later sends get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// The display flag. Only responses newer than the last applied one may
/// overwrite it, so a slow reply to an old send cannot clobber a fresh result.
#[derive(Debug)]
pub struct StatusCell {
    next_ticket: AtomicU64,
    last_applied: Mutex<u64>,
    sender: watch::Sender<SpamStatus>,
}

impl StatusCell {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(SpamStatus::default());
        Self {
            next_ticket: AtomicU64::new(1),
            last_applied: Mutex::new(0),
            sender,
        }
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.next_ticket.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns false when the ticket is stale and the status was left alone.
    pub fn apply(&self, ticket: Ticket, status: SpamStatus) -> bool {
        let mut last = self.last_applied.lock();
        if ticket.0 <= *last {
            return false;
        }
        *last = ticket.0;
        self.sender.send_replace(status);
        true
    }

    pub fn current(&self) -> SpamStatus {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SpamStatus> {
        self.sender.subscribe()
    }
}

impl Default for StatusCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_ham() {
        assert_eq!(StatusCell::new().current(), SpamStatus::Ham);
    }

    #[test]
    fn newest_ticket_wins() {
        let cell = StatusCell::new();
        let first = cell.issue();
        let second = cell.issue();
        assert!(first < second);

        assert!(cell.apply(second, SpamStatus::Spam));
        assert!(!cell.apply(first, SpamStatus::Ham));
        assert_eq!(cell.current(), SpamStatus::Spam);
    }

    #[test]
    fn in_order_responses_all_apply() {
        let cell = StatusCell::new();
        let first = cell.issue();
        let second = cell.issue();
        assert!(cell.apply(first, SpamStatus::Spam));
        assert!(cell.apply(second, SpamStatus::Ham));
        assert_eq!(cell.current(), SpamStatus::Ham);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let cell = StatusCell::new();
        let mut rx = cell.subscribe();
        cell.apply(cell.issue(), SpamStatus::Spam);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), SpamStatus::Spam);
    }
}
