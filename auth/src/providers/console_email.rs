//! Console email provider for development and testing.

use crate::error::Result;
use crate::providers::EmailProvider;
use crate::types::EmailAddress;
use chrono::{DateTime, Utc};
use tracing::info;

/// Console email provider.
///
/// This provider logs codes to the console instead of sending them.
/// Useful for development where you don't want to send real emails.
#[derive(Clone, Debug, Default)]
pub struct ConsoleEmailProvider;

impl ConsoleEmailProvider {
    /// Create a new console email provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EmailProvider for ConsoleEmailProvider {
    async fn send_one_time_code(
        &self,
        to: &EmailAddress,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<()> {
        let expires_minutes = (expires_at - Utc::now()).num_minutes();

        info!(
            to = %to,
            code = %code,
            expires_in = %expires_minutes,
            "📧 One-Time Code Email (Development Mode)"
        );
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                 ACCOUNT VERIFICATION EMAIL                   ║");
        println!("╠══════════════════════════════════════════════════════════════╣");
        println!("║ To: {:<57}║", to.as_str());
        println!("║ Subject: Your OTP for Account Verification{:<20}║", "");
        println!("╠══════════════════════════════════════════════════════════════╣");
        println!("║                                                              ║");
        println!("║ Your OTP is: {code:<48}║");
        println!("║ This code will expire in {expires_minutes} minutes.{:<23}║", "");
        println!("║                                                              ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");

        Ok(())
    }
}
