//! Provider traits and implementations.
//!
//! External dependencies of the OTP service are abstracted behind traits:
//! [`EmailProvider`] for delivery and [`CodeStore`] for issued-code
//! storage. Production uses SMTP + in-memory storage; development logs to
//! the console; tests use the mocks behind the `test-utils` feature.

pub mod code_store;
pub mod console_email;
pub mod email;
pub mod smtp_email;

pub use code_store::CodeStore;
pub use console_email::ConsoleEmailProvider;
pub use email::EmailProvider;
pub use smtp_email::SmtpEmailProvider;
