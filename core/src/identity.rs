//! External identity provider interface.
//!
//! The marketplace does not authenticate anyone itself: an external wallet
//! provider supplies an opaque account identifier and a display balance,
//! and every marketplace command receives the acting identity as a
//! parameter. This module defines that collaborator's surface, nothing
//! more. Connection UX, key management, and signing all live outside the
//! workspace.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tokio::sync::watch;

/// Result type alias for identity provider operations.
pub type Result<T> = std::result::Result<T, IdentityError>;

/// Opaque account identifier supplied by the identity provider.
///
/// The marketplace treats this as a plain label: it is stamped onto events
/// and tickets as `owner` and compared for equality, never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Creates an `AccountId` from a raw identifier string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the identifier as a string reference.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier carries no usable identity.
    ///
    /// Providers hand back empty strings in some disconnect races; callers
    /// must treat such a value as "not authenticated".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Display-only account balance, denominated in the provider's currency.
///
/// Informational: no value transfer happens anywhere in this workspace.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Balance(f64);

impl Balance {
    /// Creates a `Balance` from a raw amount.
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Returns the raw amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A connected wallet session: who is acting, and what they hold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletSession {
    /// Connected account identifier.
    pub account: AccountId,
    /// Balance at connection time, for display only.
    pub balance: Balance,
}

/// Errors surfaced by the identity provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The provider could not establish a session.
    #[error("wallet connection failed: {reason}")]
    ConnectionFailed {
        /// Provider-supplied failure description.
        reason: String,
    },
}

/// Identity provider.
///
/// Abstracts over the external wallet integration. Implementations connect
/// to whatever supplies accounts (a browser wallet, a test fixture) and
/// notify the caller when the active account changes so subsequent
/// commands can be re-scoped to the new identity.
pub trait IdentityProvider: Send + Sync {
    /// Establish a session with the provider.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::ConnectionFailed`] if no account can be
    /// resolved.
    fn connect(&self) -> impl std::future::Future<Output = Result<WalletSession>> + Send;

    /// Subscribe to active-account changes.
    ///
    /// The receiver yields `None` when the provider disconnects. Callers
    /// must re-scope in-flight work to the new identity on every change.
    fn account_changes(&self) -> watch::Receiver<Option<AccountId>>;
}
