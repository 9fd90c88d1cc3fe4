//! Mock email provider for testing.

use crate::error::{AuthError, Result};
use crate::providers::EmailProvider;
use crate::types::EmailAddress;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

/// A delivery captured by [`MockEmailProvider`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentCode {
    /// Recipient address.
    pub to: String,
    /// The delivered code.
    pub code: String,
    /// End of the code's validity window.
    pub expires_at: DateTime<Utc>,
}

/// Mock email provider.
///
/// Records deliveries instead of sending them, so tests can read the
/// issued code back out. Can be flipped to simulate delivery failure.
#[derive(Clone, Debug)]
pub struct MockEmailProvider {
    sent: Arc<Mutex<Vec<SentCode>>>,
    should_succeed: bool,
}

impl MockEmailProvider {
    /// Create a mock provider that records and succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_succeed: true,
        }
    }

    /// Create a mock provider that fails every delivery.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_succeed: false,
        }
    }

    /// All recorded deliveries, oldest first.
    pub async fn sent(&self) -> Vec<SentCode> {
        self.sent.lock().await.clone()
    }

    /// The most recently delivered code, if any.
    pub async fn last_code(&self) -> Option<String> {
        self.sent.lock().await.last().map(|s| s.code.clone())
    }
}

impl Default for MockEmailProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailProvider for MockEmailProvider {
    async fn send_one_time_code(
        &self,
        to: &EmailAddress,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<()> {
        if !self.should_succeed {
            return Err(AuthError::EmailDeliveryFailed {
                reason: "mock delivery failure".to_string(),
            });
        }

        self.sent.lock().await.push(SentCode {
            to: to.as_str().to_string(),
            code: code.to_string(),
            expires_at,
        });
        Ok(())
    }
}
