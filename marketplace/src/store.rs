//! Inventory store: the canonical, mutable collection of events.
//!
//! The store holds state and assigns event ids; it performs no business
//! validation; sold-out checks and ownership stamping belong to the
//! [`crate::MarketplaceController`]. It also does no locking: the
//! controller serializes writers and hands out snapshots to readers.

use crate::error::{MarketplaceError, Result};
use crate::types::{Event, EventId};

/// Owned collection of [`Event`]s in creation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryStore {
    events: Vec<Event>,
}

impl InventoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All events in creation order, as an immutable view.
    #[must_use]
    pub fn all_events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events in the store.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no events exist yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Looks up an event by its unique id.
    #[must_use]
    pub fn find_event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Appends a new event and assigns its id.
    ///
    /// Ids are 1-based and derived from the current collection length
    /// (`len + 1`). No delete operation exists, so length-derived ids are
    /// stable; if deletion is ever added this assignment scheme must be
    /// revisited before ids can be trusted not to repeat.
    pub fn append_event(&mut self, mut event: Event) -> Event {
        event.id = EventId::new(self.events.len() as u64 + 1);
        event.tickets_sold = 0;
        event.tickets.clear();
        self.events.push(event.clone());
        event
    }

    /// Atomically swaps the event with the given id for an updated value.
    ///
    /// The slot's id is authoritative: the updated event is stored under
    /// `id` regardless of the id it carries, preserving store-wide
    /// uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::NotFound`] if no event has this id.
    pub fn replace_event(&mut self, id: EventId, mut updated: Event) -> Result<()> {
        let slot = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(MarketplaceError::NotFound { event_id: id })?;
        updated.id = id;
        *slot = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::types::EventForm;
    use ticketchain_core::identity::AccountId;

    fn event(name: &str) -> Event {
        Event::from_form(
            EventForm {
                name: name.to_string(),
                symbol: "TCK".to_string(),
                num_tickets: 10,
                price: 2.5,
                can_be_resold: false,
                royalty_percent: 0.0,
            },
            AccountId::from("alice"),
        )
    }

    #[test]
    fn append_assigns_one_based_sequential_ids() {
        let mut store = InventoryStore::new();
        let first = store.append_event(event("first")).id;
        let second = store.append_event(event("second")).id;

        assert_eq!(first, EventId::new(1));
        assert_eq!(second, EventId::new(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn append_resets_derived_ticket_state() {
        let mut store = InventoryStore::new();
        let mut dirty = event("dirty");
        dirty.tickets_sold = 7;

        let stored = store.append_event(dirty);
        assert_eq!(stored.tickets_sold, 0);
        assert!(stored.tickets.is_empty());
    }

    #[test]
    fn find_event_resolves_by_id() {
        let mut store = InventoryStore::new();
        store.append_event(event("first"));
        store.append_event(event("second"));

        let found = store.find_event(EventId::new(2)).expect("exists");
        assert_eq!(found.name, "second");
        assert!(store.find_event(EventId::new(3)).is_none());
    }

    #[test]
    fn all_events_preserves_creation_order() {
        let mut store = InventoryStore::new();
        store.append_event(event("a"));
        store.append_event(event("b"));
        store.append_event(event("c"));

        let names: Vec<&str> = store.all_events().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn replace_event_swaps_in_place() {
        let mut store = InventoryStore::new();
        let id = store.append_event(event("original")).id;

        let mut updated = store.find_event(id).unwrap().clone();
        updated
            .issue_ticket(AccountId::from("bob"))
            .expect("capacity left");
        store.replace_event(id, updated).expect("id exists");

        let stored = store.find_event(id).unwrap();
        assert_eq!(stored.tickets_sold, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_event_rejects_unknown_id() {
        let mut store = InventoryStore::new();
        let err = store
            .replace_event(EventId::new(99), event("ghost"))
            .expect_err("nothing to replace");
        assert_eq!(
            err,
            MarketplaceError::NotFound {
                event_id: EventId::new(99)
            }
        );
    }
}
