//! Code store trait.
//!
//! Storage for issued one-time codes, keyed by email address, with atomic
//! verify-and-consume semantics.

use crate::error::Result;
use crate::types::{EmailAddress, IssuedCode};
use chrono::{DateTime, Utc};

/// Code store.
///
/// # Implementation Notes
///
/// - Codes are ephemeral (10-minute TTL by default)
/// - **CRITICAL**: [`CodeStore::verify_and_consume`] must be atomic: the
///   lookup, expiry check, comparison, and deletion happen in one
///   critical section, or concurrent submissions can redeem one code
///   twice
/// - A verified or expired code is deleted immediately; a mismatched
///   submission leaves the stored code in place for another attempt
///
/// # Security Requirements
///
/// 1. **Single-use**: a code that verified once must never verify again
/// 2. **Expiration**: expired codes are rejected and removed
/// 3. **Constant-time**: code comparison must not leak timing information
pub trait CodeStore: Send + Sync {
    /// Store a freshly issued code for an address.
    ///
    /// Re-requesting replaces any previously stored code for the same
    /// address.
    ///
    /// # Errors
    ///
    /// Returns error if the storage operation fails.
    fn put(
        &self,
        email: &EmailAddress,
        issued: IssuedCode,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Atomically verify a submitted code and consume it on success.
    ///
    /// Decision table, evaluated in one critical section:
    ///
    /// | stored state         | result                               |
    /// |----------------------|--------------------------------------|
    /// | nothing stored       | `CodeNotFound`                       |
    /// | expired at `now`     | entry deleted, `CodeExpired`         |
    /// | matches submission   | entry deleted, `Ok(())`              |
    /// | mismatch             | entry kept, `CodeInvalid`            |
    ///
    /// # Errors
    ///
    /// Returns the verification outcome as described above, or a storage
    /// failure.
    fn verify_and_consume(
        &self,
        email: &EmailAddress,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
