//! Message-characteristics signal
//!
//! Three independent checks on the raw body: short urgent wording, runs of
//! exclamation marks, and shouting in capitals.

use aho_corasick::AhoCorasick;
use smsguard_core::{CaseFolder, Error, Result};

/// Each check adds this much when it fires
pub const CHARACTERISTIC_WEIGHT: f32 = 0.1;

/// Urgency vocabulary ("now", "hurry", "last")
const URGENCY_WORDS: &[&str] = &["hemen", "acele", "son"];

/// Messages shorter than this count as short for the urgency check
const URGENT_MESSAGE_MAX: usize = 50;

const MIN_EXCLAMATIONS: usize = 3;

/// Capitals check only applies above this length
const CAPITALS_MIN_LENGTH: usize = 10;

const CAPITALS_RATIO: f32 = 0.5;

pub struct CharacteristicsAnalyzer {
    urgency: AhoCorasick,
}

impl CharacteristicsAnalyzer {
    pub fn new() -> Result<Self> {
        let urgency = AhoCorasick::new(URGENCY_WORDS).map_err(|e| {
            Error::internal(format!("Failed to build urgency matcher: {}", e))
        })?;

        Ok(Self { urgency })
    }

    /// Score contribution of this signal
    pub fn score(&self, body: &str, folder: &dyn CaseFolder, reasons: &mut Vec<String>) -> f32 {
        let mut score = 0.0;
        let length = body.chars().count();

        if length < URGENT_MESSAGE_MAX && self.urgency.is_match(&folder.fold(body)) {
            score += CHARACTERISTIC_WEIGHT;
            reasons.push("Short urgent message".to_string());
        }

        if body.chars().filter(|c| *c == '!').count() >= MIN_EXCLAMATIONS {
            score += CHARACTERISTIC_WEIGHT;
            reasons.push("Excessive punctuation".to_string());
        }

        if length > CAPITALS_MIN_LENGTH {
            let upper = body.chars().filter(|c| c.is_uppercase()).count();
            if upper as f32 / length as f32 > CAPITALS_RATIO {
                score += CHARACTERISTIC_WEIGHT;
                reasons.push("Excessive capital letters".to_string());
            }
        }

        score
    }
}

impl Default for CharacteristicsAnalyzer {
    fn default() -> Self {
        Self::new().expect("Failed to create characteristics analyzer")
    }
}
