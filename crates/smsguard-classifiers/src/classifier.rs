//! Classifier trait and common types

use crate::context::ContextMetrics;
use serde::{Deserialize, Serialize};

/// Score at or above which a message is considered spam
pub const SPAM_THRESHOLD: f32 = 0.5;

/// Reason reported for empty or whitespace-only messages
pub const EMPTY_MESSAGE_REASON: &str = "Empty message";

/// Reason reported when no signal fired
pub const NO_INDICATORS_REASON: &str = "No spam indicators";

/// How many reasons are folded into the summary `reason` string
const SUMMARY_REASON_COUNT: usize = 3;

/// Trait for all message classifiers
///
/// Implementations must be pure: identical arguments yield identical results
/// and no input makes them fail.
pub trait Classifier: Send + Sync {
    /// Classify a message body from an optional sender against a snapshot of
    /// user-defined keywords
    fn classify(
        &self,
        body: &str,
        sender: Option<&str>,
        custom_keywords: &[String],
    ) -> ClassificationResult;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Spam verdict (`score >= 0.5`)
    pub is_spam: bool,

    /// Clamped spam score (0.0-1.0)
    pub score: f32,

    /// First three reasons joined by `", "`
    pub reason: String,

    /// Every reason in the order the signals recorded them
    pub detection_reasons: Vec<String>,

    /// How message length shaped the keyword signal
    pub context: ContextMetrics,
}

impl ClassificationResult {
    /// Build a result from an unclamped score and the accumulated reasons
    pub fn from_raw(raw_score: f32, detection_reasons: Vec<String>, context: ContextMetrics) -> Self {
        let score = raw_score.clamp(0.0, 1.0);
        let reason = if detection_reasons.is_empty() {
            NO_INDICATORS_REASON.to_string()
        } else {
            detection_reasons
                .iter()
                .take(SUMMARY_REASON_COUNT)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        Self {
            is_spam: score >= SPAM_THRESHOLD,
            score,
            reason,
            detection_reasons,
            context,
        }
    }

    /// Fixed result for degenerate input
    pub fn empty_message() -> Self {
        Self {
            is_spam: false,
            score: 0.0,
            reason: EMPTY_MESSAGE_REASON.to_string(),
            detection_reasons: Vec::new(),
            context: ContextMetrics::default(),
        }
    }

    /// Risk bucket for this result
    pub fn category(&self) -> SpamCategory {
        SpamCategory::from_result(self)
    }
}

/// Risk bucket derived from a classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpamCategory {
    /// score >= 0.8
    #[serde(rename = "High Risk Spam")]
    HighRisk,
    /// 0.6 <= score < 0.8
    #[serde(rename = "Likely Spam")]
    Likely,
    /// 0.5 <= score < 0.6
    #[serde(rename = "Possible Spam")]
    Possible,
    #[serde(rename = "Not Spam")]
    NotSpam,
}

impl SpamCategory {
    /// Map a result to its category
    pub fn from_result(result: &ClassificationResult) -> Self {
        if !result.is_spam {
            Self::NotSpam
        } else if result.score >= 0.8 {
            Self::HighRisk
        } else if result.score >= 0.6 {
            Self::Likely
        } else {
            Self::Possible
        }
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighRisk => "High Risk Spam",
            Self::Likely => "Likely Spam",
            Self::Possible => "Possible Spam",
            Self::NotSpam => "Not Spam",
        }
    }
}

impl std::fmt::Display for SpamCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_score(raw: f32) -> ClassificationResult {
        ClassificationResult::from_raw(raw, vec!["x".to_string()], ContextMetrics::default())
    }

    #[test]
    fn test_from_raw_clamps_and_thresholds() {
        let result = result_with_score(1.7);
        assert_eq!(result.score, 1.0);
        assert!(result.is_spam);

        let result = result_with_score(0.49);
        assert!(!result.is_spam);

        let result = result_with_score(0.5);
        assert!(result.is_spam);
    }

    #[test]
    fn test_reason_summary_takes_first_three() {
        let reasons = vec!["a", "b", "c", "d"].into_iter().map(String::from).collect();
        let result = ClassificationResult::from_raw(0.2, reasons, ContextMetrics::default());
        assert_eq!(result.reason, "a, b, c");
        assert_eq!(result.detection_reasons.len(), 4);
    }

    #[test]
    fn test_no_indicators() {
        let result = ClassificationResult::from_raw(0.0, Vec::new(), ContextMetrics::default());
        assert_eq!(result.reason, NO_INDICATORS_REASON);
        assert!(!result.is_spam);
    }

    #[test]
    fn test_empty_message_result() {
        let result = ClassificationResult::empty_message();
        assert_eq!(result.reason, "Empty message");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.context.message_length, 0);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(result_with_score(1.0).category(), SpamCategory::HighRisk);
        assert_eq!(result_with_score(0.8).category(), SpamCategory::HighRisk);
        assert_eq!(result_with_score(0.79).category(), SpamCategory::Likely);
        assert_eq!(result_with_score(0.6).category(), SpamCategory::Likely);
        assert_eq!(result_with_score(0.59).category(), SpamCategory::Possible);
        assert_eq!(result_with_score(0.5).category(), SpamCategory::Possible);
        assert_eq!(result_with_score(0.49).category(), SpamCategory::NotSpam);
        assert_eq!(
            ClassificationResult::empty_message().category(),
            SpamCategory::NotSpam
        );
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&SpamCategory::Likely).unwrap();
        assert_eq!(json, "\"Likely Spam\"");
        assert_eq!(SpamCategory::HighRisk.to_string(), "High Risk Spam");
    }
}
