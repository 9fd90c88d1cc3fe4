//! Mock providers for testing.

pub mod email;

pub use email::{MockEmailProvider, SentCode};
