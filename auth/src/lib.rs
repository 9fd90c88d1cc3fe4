//! # TicketChain Auth
//!
//! One-time passcode (OTP) issuance and verification over email, used for
//! account verification. A loosely-coupled sidecar to the marketplace:
//! the ticketing core never calls into this crate.
//!
//! # Flow
//!
//! 1. Caller requests a code for an email address
//! 2. A 6-digit numeric code is generated and stored with a 10-minute
//!    expiry
//! 3. The code is delivered by the configured [`providers::EmailProvider`]
//! 4. Caller submits the code for verification
//! 5. The store atomically checks and consumes it. A verified or expired
//!    code is deleted immediately, a mismatched one is kept
//!
//! # Security
//!
//! - Codes are single-use
//! - Code comparison is constant-time
//! - Expiry is measured against an injected [`Clock`], never ambient time
//!
//! [`Clock`]: ticketchain_core::environment::Clock

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod error;
pub mod providers;
pub mod service;
pub mod stores;
pub mod types;

#[cfg(feature = "test-utils")]
pub mod mocks;

pub use config::{OtpConfig, SmtpConfig};
pub use error::{AuthError, Result};
pub use service::OtpService;
pub use stores::InMemoryCodeStore;
pub use types::{EmailAddress, IssuedCode};
