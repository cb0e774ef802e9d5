//! Core types for SMSGuard

use serde::{Deserialize, Serialize};

/// A text message as handed over by an external message source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsMessage {
    /// Source-assigned identifier
    #[serde(default)]
    pub id: u64,

    /// Sender address or short code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// Message body
    #[serde(default)]
    pub body: String,

    /// Receive time in milliseconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl SmsMessage {
    /// Create a new message with a body and no sender
    pub fn new(id: u64, body: impl Into<String>) -> Self {
        Self {
            id,
            sender: None,
            body: body.into(),
            timestamp: None,
        }
    }

    /// Attach a sender
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Sender for display, `"Unknown"` when absent
    pub fn sender_name(&self) -> &str {
        match self.sender.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "Unknown",
        }
    }
}
