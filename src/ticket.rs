//! Ticket-quantity stepper state.

use crate::config::MIN_TICKET_COUNT;

/// Number of tickets picked on the promotions page. Never drops below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketCounter {
    count: u32,
}

impl Default for TicketCounter {
    fn default() -> Self {
        Self {
            count: MIN_TICKET_COUNT,
        }
    }
}

impl TicketCounter {
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Step down by one. Returns `false` (and leaves the count alone) at the floor.
    pub fn decrement(&mut self) -> bool {
        if self.count > MIN_TICKET_COUNT {
            self.count -= 1;
            true
        } else {
            false
        }
    }

    /// Step up by one.
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        assert_eq!(TicketCounter::default().count(), 1);
    }

    #[test]
    fn decrement_is_noop_at_floor() {
        let mut counter = TicketCounter::default();
        assert!(!counter.decrement());
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn increment_then_decrement() {
        let mut counter = TicketCounter::default();
        for expected in 2..=5 {
            counter.increment();
            assert_eq!(counter.count(), expected);
        }
        assert!(counter.decrement());
        assert_eq!(counter.count(), 4);
        while counter.decrement() {}
        assert_eq!(counter.count(), 1);
    }
}
