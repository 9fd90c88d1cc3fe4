//! SMTP email provider implementation using Lettre.

use crate::config::SmtpConfig;
use crate::error::{AuthError, Result};
use crate::providers::EmailProvider;
use crate::types::EmailAddress;
use chrono::{DateTime, Utc};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

/// SMTP email provider using Lettre.
///
/// This provider sends real emails via SMTP, suitable for production use.
/// Defaults target Gmail's relay; any SMTP service works through
/// [`SmtpConfig`].
#[derive(Clone)]
pub struct SmtpEmailProvider {
    /// SMTP server address.
    smtp_server: String,

    /// SMTP server port.
    smtp_port: u16,

    /// SMTP credentials.
    credentials: Credentials,

    /// Sender email address.
    from_email: String,

    /// Sender display name.
    from_name: String,
}

impl SmtpEmailProvider {
    /// Create a new SMTP email provider from configuration.
    #[must_use]
    pub fn new(config: SmtpConfig) -> Self {
        let credentials = Credentials::new(config.username, config.password);

        Self {
            smtp_server: config.server,
            smtp_port: config.port,
            credentials,
            from_email: config.from_email,
            from_name: config.from_name,
        }
    }

    /// Build SMTP transport for sending emails.
    ///
    /// Creates a new transport for each email to avoid connection pooling
    /// issues.
    fn build_transport(&self) -> Result<SmtpTransport> {
        let relay = SmtpTransport::relay(&self.smtp_server)
            .map_err(|e| Self::delivery_error(format!("SMTP relay error: {e}")))?;
        Ok(relay
            .port(self.smtp_port)
            .credentials(self.credentials.clone())
            .build())
    }

    /// Build the "From" header.
    fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    fn delivery_error(reason: String) -> AuthError {
        AuthError::EmailDeliveryFailed { reason }
    }
}

impl EmailProvider for SmtpEmailProvider {
    async fn send_one_time_code(
        &self,
        to: &EmailAddress,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<()> {
        let expires_minutes = (expires_at - Utc::now()).num_minutes();
        let body = format!(
            "Your OTP is: {code}. This code will expire in {expires_minutes} minutes."
        );

        let message = Message::builder()
            .from(
                self.from_header()
                    .parse()
                    .map_err(|e| Self::delivery_error(format!("invalid from address: {e}")))?,
            )
            .to(to
                .as_str()
                .parse()
                .map_err(|e| Self::delivery_error(format!("invalid recipient: {e}")))?)
            .subject("Your OTP for Account Verification")
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| Self::delivery_error(format!("message build error: {e}")))?;

        let transport = self.build_transport()?;
        transport
            .send(&message)
            .map_err(|e| Self::delivery_error(format!("SMTP send error: {e}")))?;

        Ok(())
    }
}
