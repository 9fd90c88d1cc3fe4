//! Configuration for the OTP service.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::constants::otp;
use serde::{Deserialize, Serialize};
use std::env;

/// OTP service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpConfig {
    /// Code validity window in minutes (default: 10).
    pub code_ttl_minutes: i64,
    /// SMTP delivery configuration; `None` means console delivery.
    pub smtp: Option<SmtpConfig>,
}

/// SMTP configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// SMTP server address.
    pub server: String,
    /// SMTP server port (usually 587 for TLS).
    pub port: u16,
    /// SMTP authentication username.
    pub username: String,
    /// SMTP authentication password.
    pub password: String,
    /// Sender email address.
    pub from_email: String,
    /// Sender display name.
    pub from_name: String,
}

impl OtpConfig {
    /// Load configuration from environment variables.
    ///
    /// SMTP delivery is configured only when both `EMAIL_USER` and
    /// `EMAIL_PASS` are set; otherwise the service should fall back to
    /// console delivery. `OTP_TTL_MINUTES`, `SMTP_SERVER`, `SMTP_PORT`,
    /// `EMAIL_FROM`, and `EMAIL_FROM_NAME` override the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let code_ttl_minutes = env::var("OTP_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(otp::CODE_TTL_MINUTES);

        let smtp = match (env::var("EMAIL_USER"), env::var("EMAIL_PASS")) {
            (Ok(username), Ok(password)) => Some(SmtpConfig {
                server: env::var("SMTP_SERVER").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
                port: env::var("SMTP_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(587),
                from_email: env::var("EMAIL_FROM").unwrap_or_else(|_| username.clone()),
                from_name: env::var("EMAIL_FROM_NAME")
                    .unwrap_or_else(|_| "TicketChain".to_string()),
                username,
                password,
            }),
            _ => None,
        };

        Self {
            code_ttl_minutes,
            smtp,
        }
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: otp::CODE_TTL_MINUTES,
            smtp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_console_delivery() {
        let config = OtpConfig::default();
        assert_eq!(config.code_ttl_minutes, 10);
        assert!(config.smtp.is_none());
    }
}
