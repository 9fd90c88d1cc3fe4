//! Value types for the OTP service.

use crate::error::{AuthError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated email address.
///
/// Validation is basic RFC 5322 shape-checking: exactly one `@`,
/// non-empty local and domain parts, a dotted domain, and a sane length.
/// Full compliance would need the `email_address` crate; this matches
/// what the delivery providers accept.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and validates a raw address.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] when the address is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ticketchain_auth::EmailAddress;
    ///
    /// assert!(EmailAddress::parse("user@example.com").is_ok());
    /// assert!(EmailAddress::parse("user+tag@subdomain.example.com").is_ok());
    /// assert!(EmailAddress::parse("invalid").is_err());
    /// assert!(EmailAddress::parse("@example.com").is_err());
    /// assert!(EmailAddress::parse("user@").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() < 3 || raw.len() > 255 {
            return Err(Self::invalid("length out of range"));
        }

        let parts: Vec<&str> = raw.split('@').collect();
        let [local, domain] = parts.as_slice() else {
            return Err(Self::invalid("must contain exactly one @"));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(Self::invalid("empty local or domain part"));
        }

        if !domain.contains('.') {
            return Err(Self::invalid("domain must contain a dot"));
        }

        let valid_local = |c: char| c.is_alphanumeric() || matches!(c, '.' | '-' | '+' | '_');
        let valid_domain = |c: char| c.is_alphanumeric() || matches!(c, '.' | '-');

        if !local.chars().all(valid_local) || !domain.chars().all(valid_domain) {
            return Err(Self::invalid("illegal character"));
        }

        if domain.split('.').any(str::is_empty) {
            return Err(Self::invalid("empty domain label"));
        }

        Ok(Self(raw.to_string()))
    }

    /// Returns the address as a string reference.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn invalid(reason: &str) -> AuthError {
        AuthError::InvalidEmail {
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A code issued to one address, with its expiry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedCode {
    /// The code as the user will type it.
    code: String,
    /// End of the validity window, measured from issuance.
    expires_at: DateTime<Utc>,
}

impl IssuedCode {
    /// Creates an issued code.
    #[must_use]
    pub const fn new(code: String, expires_at: DateTime<Utc>) -> Self {
        Self { code, expires_at }
    }

    /// The code value.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// End of the validity window.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns `true` once the validity window has elapsed.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Constant-time comparison against a submitted code.
    #[must_use]
    pub fn matches(&self, submitted: &str) -> bool {
        constant_time_eq::constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }
}
