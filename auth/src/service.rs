//! The OTP service: code issuance and verification.

use crate::config::OtpConfig;
use crate::constants::otp;
use crate::error::Result;
use crate::providers::{CodeStore, EmailProvider};
use crate::types::{EmailAddress, IssuedCode};
use chrono::Duration;
use rand::Rng;
use std::sync::Arc;
use ticketchain_core::environment::Clock;
use tracing::{info, warn};

/// One-time passcode service.
///
/// Generates numeric codes, stores them with an expiry, delivers them by
/// email, and verifies submissions. Delivery and storage are injected, so
/// the same service runs against SMTP in production and mocks in tests.
///
/// The code is stored before the email is sent; a failed send surfaces
/// [`crate::AuthError::EmailDeliveryFailed`] but leaves the stored code
/// verifiable, so a delivery retry does not invalidate a code the user
/// may already have received.
pub struct OtpService<E, S> {
    email: E,
    codes: S,
    clock: Arc<dyn Clock>,
    code_ttl: Duration,
}

impl<E, S> OtpService<E, S>
where
    E: EmailProvider,
    S: CodeStore,
{
    /// Create a service with the default 10-minute validity window.
    #[must_use]
    pub fn new(email: E, codes: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            email,
            codes,
            clock,
            code_ttl: Duration::minutes(otp::CODE_TTL_MINUTES),
        }
    }

    /// Create a service with a configured validity window.
    #[must_use]
    pub fn with_config(email: E, codes: S, clock: Arc<dyn Clock>, config: &OtpConfig) -> Self {
        Self {
            email,
            codes,
            clock,
            code_ttl: Duration::minutes(config.code_ttl_minutes),
        }
    }

    /// Issue a code for an address and deliver it by email.
    ///
    /// Re-requesting replaces any outstanding code for the address.
    ///
    /// # Errors
    ///
    /// - [`crate::AuthError::InvalidEmail`] if the address is malformed
    /// - [`crate::AuthError::EmailDeliveryFailed`] if delivery fails
    pub async fn request_code(&self, raw_email: &str) -> Result<()> {
        let to = EmailAddress::parse(raw_email)?;
        let code = generate_code();
        let expires_at = self.clock.now() + self.code_ttl;

        self.codes
            .put(&to, IssuedCode::new(code.clone(), expires_at))
            .await?;
        self.email.send_one_time_code(&to, &code, expires_at).await?;

        info!(to = %to, expires_at = %expires_at, "one-time code issued");
        Ok(())
    }

    /// Verify a submitted code.
    ///
    /// A verified or expired code is consumed immediately; a mismatched
    /// submission leaves the code in place for another attempt.
    ///
    /// # Errors
    ///
    /// - [`crate::AuthError::InvalidEmail`] if the address is malformed
    /// - [`crate::AuthError::CodeNotFound`] if no code is outstanding
    /// - [`crate::AuthError::CodeExpired`] if the validity window elapsed
    /// - [`crate::AuthError::CodeInvalid`] if the code does not match
    pub async fn verify_code(&self, raw_email: &str, submitted: &str) -> Result<()> {
        let to = EmailAddress::parse(raw_email)?;
        let outcome = self
            .codes
            .verify_and_consume(&to, submitted, self.clock.now())
            .await;

        match &outcome {
            Ok(()) => info!(to = %to, "one-time code verified"),
            Err(err) => warn!(to = %to, error = %err, "one-time code rejected"),
        }
        outcome
    }
}

/// Generate a 6-digit numeric code, leading digit non-zero.
fn generate_code() -> String {
    rand::thread_rng()
        .gen_range(otp::CODE_MIN..=otp::CODE_MAX)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_have_the_documented_shape() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), otp::CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            assert!(!code.starts_with('0'));
        }
    }
}
