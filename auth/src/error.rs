//! Error types for OTP issuance and verification.

use thiserror::Error;

/// Result type alias for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Failure taxonomy for the OTP service.
///
/// Verification failures (`CodeNotFound`, `CodeExpired`, `CodeInvalid`)
/// are expected outcomes the caller surfaces to the user; delivery and
/// input failures are service-side.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The supplied email address failed validation.
    #[error("invalid email address: {reason}")]
    InvalidEmail {
        /// What was rejected.
        reason: String,
    },

    /// No code has been issued for this address.
    #[error("no code issued for this address")]
    CodeNotFound,

    /// The issued code's validity window has elapsed.
    #[error("code has expired")]
    CodeExpired,

    /// The submitted code does not match the issued one.
    #[error("invalid code")]
    CodeInvalid,

    /// The email provider failed to deliver the code.
    #[error("failed to send email: {reason}")]
    EmailDeliveryFailed {
        /// Transport-level failure description.
        reason: String,
    },
}

impl AuthError {
    /// Returns `true` for the expected verification outcomes, as opposed
    /// to service-side failures.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ticketchain_auth::AuthError;
    /// assert!(AuthError::CodeExpired.is_verification_failure());
    /// assert!(!AuthError::EmailDeliveryFailed { reason: "timeout".into() }
    ///     .is_verification_failure());
    /// ```
    #[must_use]
    pub const fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            Self::CodeNotFound | Self::CodeExpired | Self::CodeInvalid
        )
    }
}
