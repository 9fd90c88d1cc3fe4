//! Domain types for the marketplace inventory.
//!
//! Value objects and entities for events and tickets. Identifiers are
//! sequence-derived integers: event ids are 1-based and assigned by the
//! store, ticket ids are 0-based within their parent event and assigned at
//! issuance.

use crate::error::{MarketplaceError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use ticketchain_core::identity::AccountId;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for an event, 1-based across the whole store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(u64);

impl EventId {
    /// Creates an `EventId` from its numeric value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a ticket, 0-based and unique within its parent event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketId(u32);

impl TicketId {
    /// Creates a `TicketId` from its numeric value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A single issued ticket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Position in the parent event's issuance sequence.
    pub id: TicketId,
    /// Current holder.
    pub owner: AccountId,
    /// Redemption flag; write-once true, no reversal operation exists.
    pub used: bool,
    /// Resale-listing flag.
    pub for_sale: bool,
    /// Asking price while listed; meaningful only when `for_sale` is true.
    pub resale_price: f64,
}

impl Ticket {
    /// Creates a freshly issued ticket: unused, unlisted, priced at zero.
    #[must_use]
    pub const fn new(id: TicketId, owner: AccountId) -> Self {
        Self {
            id,
            owner,
            used: false,
            for_sale: false,
            resale_price: 0.0,
        }
    }
}

/// Caller-supplied fields for event creation.
///
/// The controller stamps `id`, `owner`, and the derived ticket state; the
/// form never carries them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventForm {
    /// Display name.
    pub name: String,
    /// Display symbol; opaque, no consumer beyond display.
    pub symbol: String,
    /// Ticket capacity, fixed at creation.
    pub num_tickets: u32,
    /// Fixed ticket price in the external currency unit.
    pub price: f64,
    /// Whether tickets may be re-listed.
    pub can_be_resold: bool,
    /// Royalty percentage on resales; meaningful only when `can_be_resold`.
    pub royalty_percent: f64,
}

/// An event with its ticket inventory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier, unique across the store.
    pub id: EventId,
    /// Display name.
    pub name: String,
    /// Display symbol.
    pub symbol: String,
    /// Ticket capacity, fixed at creation.
    pub num_tickets: u32,
    /// Fixed ticket price in the external currency unit.
    pub price: f64,
    /// Whether tickets may be re-listed.
    pub can_be_resold: bool,
    /// Royalty percentage on resales.
    pub royalty_percent: f64,
    /// Creator identity, fixed at creation.
    pub owner: AccountId,
    /// Issued-ticket counter; always equals `tickets.len()`.
    pub tickets_sold: u32,
    /// Issued tickets in issuance order.
    pub tickets: Vec<Ticket>,
}

impl Event {
    /// Builds a new event from a creation form.
    ///
    /// The id is a placeholder until [`crate::InventoryStore::append_event`]
    /// assigns the real one.
    #[must_use]
    pub fn from_form(form: EventForm, owner: AccountId) -> Self {
        Self {
            id: EventId::new(0),
            name: form.name,
            symbol: form.symbol,
            num_tickets: form.num_tickets,
            price: form.price,
            can_be_resold: form.can_be_resold,
            royalty_percent: form.royalty_percent,
            owner,
            tickets_sold: 0,
            tickets: Vec::new(),
        }
    }

    /// Number of tickets still available.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.num_tickets.saturating_sub(self.tickets_sold)
    }

    /// Returns `true` once capacity is exhausted.
    #[must_use]
    pub const fn is_sold_out(&self) -> bool {
        self.tickets_sold >= self.num_tickets
    }

    /// Issues the next ticket to `owner`.
    ///
    /// The ticket id is the current issuance-sequence length; the append
    /// and the `tickets_sold` increment happen together here so the
    /// counter can never drift from the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::SoldOut`] when capacity is exhausted.
    pub fn issue_ticket(&mut self, owner: AccountId) -> Result<Ticket> {
        if self.is_sold_out() {
            return Err(MarketplaceError::SoldOut { event_id: self.id });
        }

        debug_assert_eq!(self.tickets_sold as usize, self.tickets.len());
        let ticket = Ticket::new(TicketId::new(self.tickets_sold), owner);
        self.tickets.push(ticket.clone());
        self.tickets_sold += 1;
        Ok(ticket)
    }
}

/// A ticket enriched with its parent event, as returned by per-owner
/// lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OwnedTicket {
    /// The ticket itself.
    pub ticket: Ticket,
    /// Parent event id.
    pub event_id: EventId,
    /// Parent event display name.
    pub event_name: String,
}
