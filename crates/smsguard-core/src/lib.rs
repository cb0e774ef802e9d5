//! SMSGuard Core
//!
//! Core types, traits, and utilities shared across SMSGuard components.
//!
//! This crate provides:
//! - Error types and result handling
//! - The message model consumed from external message sources
//! - Locale-aware case folding used for keyword normalization

pub mod casefold;
pub mod error;
pub mod types;

pub use casefold::{CaseFolder, TurkishCaseFolder, UnicodeCaseFolder};
pub use error::{Error, Result};
pub use types::SmsMessage;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::casefold::{CaseFolder, TurkishCaseFolder, UnicodeCaseFolder};
    pub use crate::error::{Error, Result};
    pub use crate::types::SmsMessage;
}
