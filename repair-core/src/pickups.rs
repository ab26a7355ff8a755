use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A finished repair waiting for the customer to collect it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPickup {
    pub id: String,
    pub customer: String,
    pub device: String,
    pub ready_date: NaiveDateTime,
    pub contact_attempts: u32,
    pub phone: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickupQueue {
    pickups: Vec<PendingPickup>,
    collected: u32,
}

impl PickupQueue {
    pub fn new(pickups: Vec<PendingPickup>) -> Self {
        Self {
            pickups,
            collected: 0,
        }
    }

    pub fn pickups(&self) -> &[PendingPickup] {
        &self.pickups
    }

    /// Pickups handed over since the queue was created.
    pub fn collected(&self) -> u32 {
        self.collected
    }

    /// Records one more contact attempt. Returns the new count, `None` on a miss.
    pub fn contact(&mut self, id: &str) -> Option<u32> {
        let Some(pickup) = self.pickups.iter_mut().find(|p| p.id == id) else {
            warn!(pickup = %id, "contact for unknown pickup ignored");
            return None;
        };
        pickup.contact_attempts = pickup.contact_attempts.saturating_add(1);
        Some(pickup.contact_attempts)
    }

    /// Removes the pickup for good.
    pub fn mark_picked_up(&mut self, id: &str) -> Option<PendingPickup> {
        let Some(index) = self.pickups.iter().position(|p| p.id == id) else {
            warn!(pickup = %id, "pickup already gone");
            return None;
        };
        let pickup = self.pickups.remove(index);
        self.collected = self.collected.saturating_add(1);
        info!(pickup = %pickup.id, customer = %pickup.customer, "device picked up");
        Some(pickup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn contact_increments_only_the_match() {
        let mut queue = PickupQueue::new(seed::pickups());
        let before = queue.pickups().to_vec();

        assert_eq!(queue.contact("2"), Some(2));

        let after = queue.pickups();
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(after) {
            if old.id == "2" {
                assert_eq!(
                    new,
                    &PendingPickup {
                        contact_attempts: 2,
                        ..old.clone()
                    }
                );
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn contact_count_saturates() {
        let mut pickups = seed::pickups();
        pickups[0].contact_attempts = u32::MAX;
        let mut queue = PickupQueue::new(pickups);
        let before = queue.clone();

        assert_eq!(queue.contact("1"), Some(u32::MAX));
        assert_eq!(queue, before);
    }

    #[test]
    fn picked_up_removes_exactly_one() {
        let mut queue = PickupQueue::new(seed::pickups());

        let removed = queue.mark_picked_up("1").unwrap();
        assert_eq!(removed.customer, "John Doe");
        let ids: Vec<_> = queue.pickups().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
        assert_eq!(queue.collected(), 1);
    }

    #[test]
    fn misses_leave_queue_untouched() {
        let mut queue = PickupQueue::new(seed::pickups());
        let before = queue.clone();

        assert_eq!(queue.contact("nope"), None);
        assert!(queue.mark_picked_up("nope").is_none());
        assert_eq!(queue, before);

        queue.mark_picked_up("3");
        assert!(queue.mark_picked_up("3").is_none());
        assert_eq!(queue.collected(), 1);
    }
}
