//! # TicketChain Core
//!
//! Shared seams for the TicketChain workspace.
//!
//! This crate sits at the bottom of the dependency graph and defines the
//! interfaces the other crates are built against:
//!
//! - [`environment::Clock`]: injected time source, so expiry logic stays
//!   deterministic under test
//! - [`identity`]: the external wallet/identity provider the marketplace
//!   consumes: an opaque [`identity::AccountId`] plus a balance, never a
//!   key or a signature
//!
//! The marketplace never talks to a wallet or a clock directly; it
//! receives an already-resolved identity per command, and the auth
//! service receives its clock through [`environment::Clock`].

pub mod environment;
pub mod identity;

pub use environment::{Clock, SystemClock};
pub use identity::{AccountId, Balance, IdentityError, IdentityProvider, WalletSession};
