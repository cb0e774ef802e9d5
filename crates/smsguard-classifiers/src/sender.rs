//! Sender analysis

use regex::Regex;
use smsguard_core::{CaseFolder, Error, Result};

/// Score added when the sender matches a high-risk pattern
pub const HIGH_RISK_SENDER_WEIGHT: f32 = 0.2;

/// Score added when the raw sender is a 4-6 digit short code
pub const SHORT_NUMERIC_SENDER_WEIGHT: f32 = 0.15;

pub const SHORT_NUMERIC_REASON: &str = "Short numeric sender";

/// Patterns tested against the folded sender; first match wins
const HIGH_RISK_SENDERS: &[&str] = &[
    r"^[0-9]{4,5}$",
    r"bonus",
    r"bet",
    r"casino",
];

const SHORT_NUMERIC_SENDER: &str = r"^[0-9]{4,6}$";

/// Scores a sender identifier
#[derive(Debug, Clone)]
pub struct SenderAnalyzer {
    high_risk: Vec<Regex>,
    short_numeric: Regex,
}

impl SenderAnalyzer {
    pub fn new() -> Result<Self> {
        let high_risk = HIGH_RISK_SENDERS
            .iter()
            .map(|expr| {
                Regex::new(expr).map_err(|e| {
                    Error::internal(format!("Failed to compile sender regex: {}", e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            high_risk,
            short_numeric: Regex::new(SHORT_NUMERIC_SENDER).map_err(|e| {
                Error::internal(format!("Failed to compile short code regex: {}", e))
            })?,
        })
    }

    /// Score contribution of this signal
    ///
    /// The pattern check and the short-code check are independent and stack.
    pub fn score(
        &self,
        sender: Option<&str>,
        folder: &dyn CaseFolder,
        reasons: &mut Vec<String>,
    ) -> f32 {
        let sender = match sender {
            Some(s) if !s.is_empty() => s,
            _ => return 0.0,
        };

        let mut score = 0.0;
        let folded = folder.fold(sender);

        if self.high_risk.iter().any(|p| p.is_match(&folded)) {
            score += HIGH_RISK_SENDER_WEIGHT;
            reasons.push(format!("Suspicious sender: {}", sender));
        }

        if self.short_numeric.is_match(sender) {
            score += SHORT_NUMERIC_SENDER_WEIGHT;
            reasons.push(SHORT_NUMERIC_REASON.to_string());
        }

        score
    }
}

impl Default for SenderAnalyzer {
    fn default() -> Self {
        Self::new().expect("Failed to create sender analyzer")
    }
}

/// Check a phone number against well-known Turkish marketing ranges
///
/// Matches `0850` and `444` prefixed numbers and bare 4-digit short codes.
pub fn is_known_spam_number(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }

    number.starts_with("0850")
        || number.starts_with("444")
        || (number.len() == 4 && number.bytes().all(|b| b.is_ascii_digit()))
}
