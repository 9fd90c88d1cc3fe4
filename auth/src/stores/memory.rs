//! In-memory code store.

use crate::error::{AuthError, Result};
use crate::providers::CodeStore;
use crate::types::{EmailAddress, IssuedCode};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mutex-guarded in-memory code store.
///
/// Process-memory only: restarting loses outstanding codes, which is the
/// intended scope. The whole verify-and-consume decision runs under one
/// lock acquisition, giving the atomic single-use semantics the
/// [`CodeStore`] contract requires.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCodeStore {
    codes: Arc<Mutex<HashMap<String, IssuedCode>>>,
}

impl InMemoryCodeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            codes: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of outstanding codes.
    pub async fn len(&self) -> usize {
        self.codes.lock().await.len()
    }

    /// Returns `true` if no codes are outstanding.
    pub async fn is_empty(&self) -> bool {
        self.codes.lock().await.is_empty()
    }
}

impl CodeStore for InMemoryCodeStore {
    async fn put(&self, email: &EmailAddress, issued: IssuedCode) -> Result<()> {
        let mut codes = self.codes.lock().await;
        codes.insert(email.as_str().to_string(), issued);
        Ok(())
    }

    async fn verify_and_consume(
        &self,
        email: &EmailAddress,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let mut codes = self.codes.lock().await;

        let Some(issued) = codes.get(email.as_str()) else {
            return Err(AuthError::CodeNotFound);
        };

        // Evaluate both conditions before branching so a wrong code and an
        // expired code take the same path length.
        let matches = issued.matches(submitted);
        let expired = issued.is_expired(now);

        if expired {
            codes.remove(email.as_str());
            return Err(AuthError::CodeExpired);
        }

        if matches {
            codes.remove(email.as_str());
            return Ok(());
        }

        Err(AuthError::CodeInvalid)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use chrono::Duration;

    fn address() -> EmailAddress {
        EmailAddress::parse("user@example.com").expect("valid address")
    }

    fn issued(code: &str, now: DateTime<Utc>) -> IssuedCode {
        IssuedCode::new(code.to_string(), now + Duration::minutes(10))
    }

    #[tokio::test]
    async fn verify_consumes_matching_code() {
        let store = InMemoryCodeStore::new();
        let now = Utc::now();
        store.put(&address(), issued("123456", now)).await.unwrap();

        store
            .verify_and_consume(&address(), "123456", now)
            .await
            .expect("code matches");

        // Single-use: the second submission finds nothing.
        let err = store
            .verify_and_consume(&address(), "123456", now)
            .await
            .expect_err("already consumed");
        assert_eq!(err, AuthError::CodeNotFound);
    }

    #[tokio::test]
    async fn mismatch_keeps_code_for_another_attempt() {
        let store = InMemoryCodeStore::new();
        let now = Utc::now();
        store.put(&address(), issued("123456", now)).await.unwrap();

        let err = store
            .verify_and_consume(&address(), "999999", now)
            .await
            .expect_err("wrong code");
        assert_eq!(err, AuthError::CodeInvalid);

        // Still there; the right code goes through afterwards.
        store
            .verify_and_consume(&address(), "123456", now)
            .await
            .expect("code kept after mismatch");
    }

    #[tokio::test]
    async fn expired_code_is_deleted_on_sight() {
        let store = InMemoryCodeStore::new();
        let now = Utc::now();
        store.put(&address(), issued("123456", now)).await.unwrap();

        let later = now + Duration::minutes(11);
        let err = store
            .verify_and_consume(&address(), "123456", later)
            .await
            .expect_err("past the window");
        assert_eq!(err, AuthError::CodeExpired);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn expired_code_is_deleted_even_on_mismatch() {
        let store = InMemoryCodeStore::new();
        let now = Utc::now();
        store.put(&address(), issued("123456", now)).await.unwrap();

        let later = now + Duration::minutes(11);
        let err = store
            .verify_and_consume(&address(), "000000", later)
            .await
            .expect_err("expired and wrong");
        assert_eq!(err, AuthError::CodeExpired);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn reissue_replaces_previous_code() {
        let store = InMemoryCodeStore::new();
        let now = Utc::now();
        store.put(&address(), issued("111111", now)).await.unwrap();
        store.put(&address(), issued("222222", now)).await.unwrap();

        let err = store
            .verify_and_consume(&address(), "111111", now)
            .await
            .expect_err("replaced by reissue");
        assert_eq!(err, AuthError::CodeInvalid);

        store
            .verify_and_consume(&address(), "222222", now)
            .await
            .expect("current code verifies");
        assert_eq!(store.len().await, 0);
    }
}
