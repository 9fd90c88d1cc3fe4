//! Marketplace controller: the user-facing command surface.
//!
//! The controller enforces business invariants (authentication, input
//! validation, sold-out checks) and stamps the fields callers must not
//! set directly (ids, ownership, derived counters) on top of the
//! [`InventoryStore`].
//!
//! Writers take the store's write lock for the whole read-modify-write of
//! a command, so at most one `create_event` or `buy_ticket` mutates the
//! inventory at a time. Readers take the read lock and clone, so they
//! observe either all of a committed command's effect or none of it.

use crate::error::{MarketplaceError, Result};
use crate::store::InventoryStore;
use crate::types::{Event, EventForm, EventId, OwnedTicket, Ticket};
use std::sync::Arc;
use ticketchain_core::identity::AccountId;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Maximum accepted event-name length.
const MAX_NAME_LEN: usize = 200;

/// Controller over a single shared [`InventoryStore`].
///
/// Cloning is cheap and yields a handle to the same inventory.
#[derive(Clone, Debug, Default)]
pub struct MarketplaceController {
    inventory: Arc<RwLock<InventoryStore>>,
}

impl MarketplaceController {
    /// Creates a controller over an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inventory: Arc::new(RwLock::new(InventoryStore::new())),
        }
    }

    /// Creates a new event owned by the acting identity.
    ///
    /// The store assigns the id; `tickets_sold` starts at zero with no
    /// tickets issued.
    ///
    /// # Errors
    ///
    /// - [`MarketplaceError::Unauthenticated`] if no identity is connected
    /// - [`MarketplaceError::InvalidInput`] if the form fails validation
    pub async fn create_event(
        &self,
        form: EventForm,
        identity: Option<&AccountId>,
    ) -> Result<Event> {
        let owner = Self::require_identity(identity)?;
        Self::validate_form(&form)?;

        let mut inventory = self.inventory.write().await;
        let event = inventory.append_event(Event::from_form(form, owner.clone()));

        info!(
            event_id = %event.id,
            owner = %event.owner,
            name = %event.name,
            capacity = event.num_tickets,
            "event created"
        );
        Ok(event)
    }

    /// Buys one ticket for the acting identity.
    ///
    /// The sold-out check, ticket issuance, and write-back happen under a
    /// single write-lock acquisition: concurrent buyers race for the lock,
    /// not for the capacity check.
    ///
    /// # Errors
    ///
    /// - [`MarketplaceError::Unauthenticated`] if no identity is connected
    /// - [`MarketplaceError::NotFound`] if the event does not exist
    /// - [`MarketplaceError::SoldOut`] if capacity is exhausted
    pub async fn buy_ticket(
        &self,
        event_id: EventId,
        identity: Option<&AccountId>,
    ) -> Result<Ticket> {
        let buyer = Self::require_identity(identity)?;

        let mut inventory = self.inventory.write().await;
        let mut event = inventory
            .find_event(event_id)
            .cloned()
            .ok_or(MarketplaceError::NotFound { event_id })?;

        let ticket = match event.issue_ticket(buyer.clone()) {
            Ok(ticket) => ticket,
            Err(err) => {
                warn!(event_id = %event_id, buyer = %buyer, error = %err, "ticket purchase refused");
                return Err(err);
            }
        };
        inventory.replace_event(event_id, event)?;

        info!(
            event_id = %event_id,
            ticket_id = %ticket.id,
            owner = %ticket.owner,
            "ticket issued"
        );
        Ok(ticket)
    }

    /// All tickets held by `identity`, enriched with their parent event.
    ///
    /// Order is deterministic: events in store order, tickets within an
    /// event in issuance order. An identity that owns nothing yields an
    /// empty vector; unknown identities are not an error.
    pub async fn tickets_owned_by(&self, identity: &AccountId) -> Vec<OwnedTicket> {
        let inventory = self.inventory.read().await;
        inventory
            .all_events()
            .iter()
            .flat_map(|event| {
                event
                    .tickets
                    .iter()
                    .filter(|ticket| ticket.owner == *identity)
                    .map(|ticket| OwnedTicket {
                        ticket: ticket.clone(),
                        event_id: event.id,
                        event_name: event.name.clone(),
                    })
            })
            .collect()
    }

    /// Consistent snapshot of all events in creation order.
    pub async fn events(&self) -> Vec<Event> {
        self.inventory.read().await.all_events().to_vec()
    }

    /// Resolves the acting identity, rejecting absent or empty ones.
    ///
    /// The UI layer only renders commands once a wallet is connected, but
    /// that gate lives outside this crate, so every command re-checks here.
    fn require_identity(identity: Option<&AccountId>) -> Result<&AccountId> {
        match identity {
            Some(account) if !account.is_empty() => Ok(account),
            _ => Err(MarketplaceError::Unauthenticated),
        }
    }

    /// Validates caller-supplied creation parameters.
    ///
    /// The original inputs arrive from parsed form fields, so the numeric
    /// ones are checked for the values a failed parse produces (NaN,
    /// negatives) instead of being stored as-is.
    fn validate_form(form: &EventForm) -> Result<()> {
        if form.name.is_empty() {
            return Err(Self::invalid("event name cannot be empty"));
        }
        if form.name.len() > MAX_NAME_LEN {
            return Err(Self::invalid("event name too long"));
        }
        if form.symbol.is_empty() {
            return Err(Self::invalid("event symbol cannot be empty"));
        }
        if !form.price.is_finite() || form.price < 0.0 {
            return Err(Self::invalid("price must be a non-negative number"));
        }
        if !form.royalty_percent.is_finite()
            || !(0.0..=100.0).contains(&form.royalty_percent)
        {
            return Err(Self::invalid("royalty percent must be between 0 and 100"));
        }
        Ok(())
    }

    fn invalid(reason: &str) -> MarketplaceError {
        MarketplaceError::InvalidInput {
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn expo_form() -> EventForm {
        EventForm {
            name: "Expo".to_string(),
            symbol: "EXPO".to_string(),
            num_tickets: 2,
            price: 1.0,
            can_be_resold: true,
            royalty_percent: 5.0,
        }
    }

    #[tokio::test]
    async fn create_event_requires_identity() {
        let controller = MarketplaceController::new();

        let err = controller
            .create_event(expo_form(), None)
            .await
            .expect_err("no identity");
        assert_eq!(err, MarketplaceError::Unauthenticated);

        let empty = AccountId::from("");
        let err = controller
            .create_event(expo_form(), Some(&empty))
            .await
            .expect_err("empty identity");
        assert_eq!(err, MarketplaceError::Unauthenticated);
    }

    #[tokio::test]
    async fn create_event_rejects_malformed_forms() {
        let controller = MarketplaceController::new();
        let alice = AccountId::from("alice");

        let mut nameless = expo_form();
        nameless.name = String::new();
        assert!(matches!(
            controller.create_event(nameless, Some(&alice)).await,
            Err(MarketplaceError::InvalidInput { .. })
        ));

        let mut nan_price = expo_form();
        nan_price.price = f64::NAN;
        assert!(matches!(
            controller.create_event(nan_price, Some(&alice)).await,
            Err(MarketplaceError::InvalidInput { .. })
        ));

        let mut negative_price = expo_form();
        negative_price.price = -1.0;
        assert!(matches!(
            controller.create_event(negative_price, Some(&alice)).await,
            Err(MarketplaceError::InvalidInput { .. })
        ));

        let mut royalty = expo_form();
        royalty.royalty_percent = 101.0;
        assert!(matches!(
            controller.create_event(royalty, Some(&alice)).await,
            Err(MarketplaceError::InvalidInput { .. })
        ));

        // Nothing was stored by any of the rejected commands.
        assert!(controller.events().await.is_empty());
    }

    #[tokio::test]
    async fn buy_ticket_requires_identity() {
        let controller = MarketplaceController::new();
        let alice = AccountId::from("alice");
        let event = controller
            .create_event(expo_form(), Some(&alice))
            .await
            .expect("valid form");

        let err = controller
            .buy_ticket(event.id, None)
            .await
            .expect_err("no identity");
        assert_eq!(err, MarketplaceError::Unauthenticated);
    }

    #[tokio::test]
    async fn buy_ticket_unknown_event_is_not_found() {
        let controller = MarketplaceController::new();
        let bob = AccountId::from("bob");

        let err = controller
            .buy_ticket(EventId::new(999), Some(&bob))
            .await
            .expect_err("no such event");
        assert_eq!(
            err,
            MarketplaceError::NotFound {
                event_id: EventId::new(999)
            }
        );
    }
}
