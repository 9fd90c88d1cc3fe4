//! Email provider trait.

use crate::error::Result;
use crate::types::EmailAddress;
use chrono::{DateTime, Utc};

/// Email provider.
///
/// This trait abstracts over email delivery services (SMTP relays,
/// transactional APIs, the console in development).
pub trait EmailProvider: Send + Sync {
    /// Send a one-time passcode email.
    ///
    /// # Arguments
    ///
    /// - `to`: Recipient address
    /// - `code`: The passcode as the user should type it
    /// - `expires_at`: End of the code's validity window
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network request fails
    /// - The delivery service rejects the message
    fn send_one_time_code(
        &self,
        to: &EmailAddress,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
