//! # TicketChain Testing
//!
//! Deterministic test doubles for the TicketChain workspace.
//!
//! This crate provides:
//! - Clocks with controllable time ([`FixedClock`], [`AdjustableClock`])
//! - A canned identity provider ([`StaticIdentityProvider`]) with an
//!   account-switch handle for exercising identity-change handling
//! - A tracing initializer for test diagnostics
//!
//! ## Example
//!
//! ```
//! use ticketchain_testing::mocks::{test_clock, AdjustableClock};
//! use ticketchain_core::environment::Clock;
//! use chrono::Duration;
//!
//! let clock = AdjustableClock::new(test_clock().now());
//! let before = clock.now();
//! clock.advance(Duration::minutes(11));
//! assert_eq!(clock.now() - before, Duration::minutes(11));
//! ```

use chrono::{DateTime, Duration, Utc};
use ticketchain_core::environment::Clock;
use ticketchain_core::identity::{
    AccountId, Balance, IdentityProvider, Result as IdentityResult, WalletSession,
};
use tokio::sync::watch;

/// Mock implementations of environment traits.
pub mod mocks {
    use super::{
        AccountId, Balance, Clock, DateTime, Duration, IdentityProvider, IdentityResult, Utc,
        WalletSession, watch,
    };
    use std::sync::Mutex;

    /// Fixed clock for deterministic tests.
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use ticketchain_testing::mocks::FixedClock;
    /// use ticketchain_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time.
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC).
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Clock whose time tests can move forward, for expiry scenarios.
    #[derive(Debug)]
    pub struct AdjustableClock {
        time: Mutex<DateTime<Utc>>,
    }

    impl AdjustableClock {
        /// Create an adjustable clock starting at the given time.
        #[must_use]
        pub const fn new(start: DateTime<Utc>) -> Self {
            Self {
                time: Mutex::new(start),
            }
        }

        /// Move the clock forward by `delta`.
        ///
        /// # Panics
        ///
        /// Panics if another holder of the clock panicked mid-update,
        /// which cannot happen under normal test usage.
        #[allow(clippy::expect_used)]
        pub fn advance(&self, delta: Duration) {
            let mut time = self.time.lock().expect("clock mutex poisoned");
            *time += delta;
        }
    }

    impl Clock for AdjustableClock {
        #[allow(clippy::expect_used)]
        fn now(&self) -> DateTime<Utc> {
            *self.time.lock().expect("clock mutex poisoned")
        }
    }

    /// Identity provider that always connects the same canned account.
    ///
    /// [`StaticIdentityProvider::switch_account`] simulates the provider's
    /// "accounts changed" notification so tests can verify callers
    /// re-scope commands to the new identity.
    #[derive(Debug)]
    pub struct StaticIdentityProvider {
        session: WalletSession,
        changes: watch::Sender<Option<AccountId>>,
    }

    impl StaticIdentityProvider {
        /// Create a provider that connects `account` with `balance`.
        #[must_use]
        pub fn new(account: AccountId, balance: Balance) -> Self {
            let (changes, _) = watch::channel(Some(account.clone()));
            Self {
                session: WalletSession { account, balance },
                changes,
            }
        }

        /// Announce a new active account to subscribers.
        pub fn switch_account(&self, account: AccountId) {
            self.changes.send_replace(Some(account));
        }

        /// Announce a disconnect to subscribers.
        pub fn disconnect(&self) {
            self.changes.send_replace(None);
        }
    }

    impl IdentityProvider for StaticIdentityProvider {
        async fn connect(&self) -> IdentityResult<WalletSession> {
            Ok(self.session.clone())
        }

        fn account_changes(&self) -> watch::Receiver<Option<AccountId>> {
            self.changes.subscribe()
        }
    }
}

/// Test helpers and utilities.
pub mod helpers {
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize tracing output for a test binary, once.
    ///
    /// Respects `RUST_LOG`; defaults to `info` when unset. Safe to call
    /// from every test.
    pub fn init_test_tracing() {
        INIT.call_once(|| {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_test_writer()
                .try_init();
        });
    }
}

// Re-export commonly used items
pub use helpers::init_test_tracing;
pub use mocks::{AdjustableClock, FixedClock, StaticIdentityProvider, test_clock};
