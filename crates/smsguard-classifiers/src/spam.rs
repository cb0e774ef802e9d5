//! Context-aware SMS spam classifier
//!
//! Scores a message from four additive signal groups:
//! - Keywords, scaled by a length-dependent multiplier
//! - Suspicious patterns in the raw body (amounts, links, promo codes)
//! - Sender shape (short codes, gambling-adjacent names)
//! - Message characteristics (urgency, punctuation, capitals)
//!
//! The sum is clamped to 1.0 and a message is spam at 0.5 or above.

use crate::characteristics::CharacteristicsAnalyzer;
use crate::classifier::{ClassificationResult, Classifier};
use crate::config::ClassifierConfig;
use crate::context::ContextMetrics;
use crate::keywords::{candidate_keywords, KeywordMatching};
use crate::patterns::PatternSet;
use crate::sender::SenderAnalyzer;
use smsguard_core::{CaseFolder, Result, SmsMessage, TurkishCaseFolder};
use std::sync::Arc;
use tracing::{debug, trace};

/// Score added when the whole message is one keyword
pub const EXACT_MATCH_WEIGHT: f32 = 0.8;

/// Score added per keyword found inside the message
pub const KEYWORD_WEIGHT: f32 = 0.35;

/// Flat bonus once enough keywords match
pub const MULTIPLE_KEYWORDS_BONUS: f32 = 0.2;

const MULTIPLE_KEYWORDS_MIN: usize = 3;

/// Keyword-specific reasons recorded per message
const MAX_KEYWORD_REASONS: usize = 3;

/// Keyword signal outcome before it is folded into the total
#[derive(Debug, Clone, PartialEq)]
struct KeywordSignal {
    score: f32,
    context: ContextMetrics,
}

/// Heuristic spam classifier for short text messages
pub struct SpamClassifier {
    name: String,
    folder: Arc<dyn CaseFolder>,
    matching: KeywordMatching,
    patterns: PatternSet,
    sender: SenderAnalyzer,
    characteristics: CharacteristicsAnalyzer,
}

impl SpamClassifier {
    /// Create a classifier with Turkish folding and substring matching
    pub fn new() -> Result<Self> {
        Self::with_name("sms-spam")
    }

    /// Create with a custom name
    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            folder: Arc::new(TurkishCaseFolder),
            matching: KeywordMatching::default(),
            patterns: PatternSet::new()?,
            sender: SenderAnalyzer::new()?,
            characteristics: CharacteristicsAnalyzer::new()?,
        })
    }

    /// Create from configuration
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        Ok(Self::new()?
            .with_case_folder(config.case_folding.to_case_folder())
            .with_matching(config.matching))
    }

    /// Replace the case-folding rule set
    pub fn with_case_folder(mut self, folder: Arc<dyn CaseFolder>) -> Self {
        self.folder = folder;
        self
    }

    /// Replace the keyword matching mode
    pub fn with_matching(mut self, matching: KeywordMatching) -> Self {
        self.matching = matching;
        self
    }

    pub fn matching(&self) -> KeywordMatching {
        self.matching
    }

    pub fn case_folder(&self) -> &dyn CaseFolder {
        self.folder.as_ref()
    }

    /// Classify a message handed over by a message source
    pub fn classify_message(&self, message: &SmsMessage, custom_keywords: &[String]) -> ClassificationResult {
        self.classify(&message.body, message.sender.as_deref(), custom_keywords)
    }

    /// Classify raw bytes; invalid UTF-8 sequences are replaced, not rejected
    pub fn classify_bytes(
        &self,
        body: &[u8],
        sender: Option<&[u8]>,
        custom_keywords: &[String],
    ) -> ClassificationResult {
        let body = String::from_utf8_lossy(body);
        let sender = sender.map(String::from_utf8_lossy);
        self.classify(&body, sender.as_deref(), custom_keywords)
    }

    fn keyword_signal(
        &self,
        trimmed: &str,
        custom_keywords: &[String],
        reasons: &mut Vec<String>,
    ) -> KeywordSignal {
        let folded = self.folder.fold(trimmed);
        let mut base_score = 0.0;
        let mut keyword_count = 0;

        for candidate in candidate_keywords(self.folder.as_ref(), custom_keywords) {
            let reason = if folded == candidate.folded {
                base_score += EXACT_MATCH_WEIGHT;
                format!("Exact match: {}", candidate.display)
            } else if self.matching.matches(&folded, &candidate.folded) {
                base_score += KEYWORD_WEIGHT;
                format!("Spam keyword: {}", candidate.display)
            } else {
                continue;
            };

            trace!(keyword = %candidate.display, kind = ?candidate.kind, "Keyword matched");

            keyword_count += 1;
            if keyword_count <= MAX_KEYWORD_REASONS {
                reasons.push(reason);
            }
        }

        if keyword_count >= MULTIPLE_KEYWORDS_MIN {
            base_score += MULTIPLE_KEYWORDS_BONUS;
            reasons.push("Multiple spam keywords".to_string());
        }

        let context = ContextMetrics::for_message(trimmed.chars().count(), keyword_count);
        if keyword_count > 0 {
            if let Some(reason) = context.length_category.keyword_reason() {
                reasons.push(reason.to_string());
            }
        }

        KeywordSignal {
            score: base_score * context.context_multiplier,
            context,
        }
    }
}

impl Default for SpamClassifier {
    fn default() -> Self {
        Self::new().expect("Failed to create spam classifier")
    }
}

impl Classifier for SpamClassifier {
    fn classify(
        &self,
        body: &str,
        sender: Option<&str>,
        custom_keywords: &[String],
    ) -> ClassificationResult {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return ClassificationResult::empty_message();
        }

        let mut reasons = Vec::new();

        let keywords = self.keyword_signal(trimmed, custom_keywords, &mut reasons);
        let mut raw_score = keywords.score;
        raw_score += self.patterns.score(body, &mut reasons);
        raw_score += self.sender.score(sender, self.folder.as_ref(), &mut reasons);
        raw_score += self
            .characteristics
            .score(body, self.folder.as_ref(), &mut reasons);

        let result = ClassificationResult::from_raw(raw_score, reasons, keywords.context);

        debug!(
            classifier = %self.name,
            score = result.score,
            is_spam = result.is_spam,
            keyword_count = result.context.keyword_count,
            category = %result.context.length_category,
            "Classified message"
        );

        result
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LengthCategory;

    fn classify(body: &str, sender: Option<&str>) -> ClassificationResult {
        SpamClassifier::new().unwrap().classify(body, sender, &[])
    }

    #[test]
    fn test_empty_message() {
        for body in ["", "   ", "\n\t "] {
            let result = classify(body, Some("12345"));
            assert!(!result.is_spam);
            assert_eq!(result.score, 0.0);
            assert_eq!(result.reason, "Empty message");
            assert_eq!(result.context, ContextMetrics::default());
        }
    }

    #[test]
    fn test_exact_builtin_keyword() {
        let result = classify("bahis", None);
        assert_eq!(result.score, 1.0);
        assert!(result.is_spam);
        assert_eq!(result.detection_reasons[0], "Exact match: bahis");
        assert_eq!(result.context.length_category, LengthCategory::Short);
        assert_eq!(result.context.keyword_count, 1);
    }

    #[test]
    fn test_exact_match_is_case_folded() {
        let result = classify("  BAHİS  ", None);
        assert_eq!(result.detection_reasons[0], "Exact match: bahis");
    }

    #[test]
    fn test_clean_message() {
        let result = classify("Aksam yemege geliyor musun?", Some("+905551234567"));
        assert_eq!(result.score, 0.0);
        assert!(!result.is_spam);
        assert_eq!(result.reason, "No spam indicators");
        assert_eq!(result.context.length_category, LengthCategory::Short);
    }

    #[test]
    fn test_custom_keyword_contributes() {
        let classifier = SpamClassifier::new().unwrap();
        let custom = vec!["kampanya".to_string()];
        let body = format!("Yeni kampanya {}", "x".repeat(60));

        let without = classifier.classify(&body, None, &[]);
        let with = classifier.classify(&body, None, &custom);

        assert_eq!(without.score, 0.0);
        assert!((with.score - 0.35).abs() < 1e-6);
        assert_eq!(with.detection_reasons, vec!["Spam keyword: kampanya"]);
    }

    #[test]
    fn test_duplicate_custom_keyword_counts_once() {
        let classifier = SpamClassifier::new().unwrap();
        let body = format!("poker {}", "x".repeat(60));
        let custom = vec!["POKER".to_string(), "poker".to_string()];

        let plain = classifier.classify(&body, None, &[]);
        let duplicated = classifier.classify(&body, None, &custom);

        assert_eq!(plain, duplicated);
        assert_eq!(duplicated.context.keyword_count, 1);
    }

    #[test]
    fn test_word_boundary_mode() {
        let body = format!("the alphabet {}", "x".repeat(60));
        let substring = SpamClassifier::new().unwrap();
        let bounded = SpamClassifier::new()
            .unwrap()
            .with_matching(KeywordMatching::WordBoundary);

        assert_eq!(substring.classify(&body, None, &[]).context.keyword_count, 1);
        assert_eq!(bounded.classify(&body, None, &[]).context.keyword_count, 0);
    }

    #[test]
    fn test_invalid_utf8_is_scored() {
        let classifier = SpamClassifier::new().unwrap();
        let result = classifier.classify_bytes(b"bahis \xff\xfe", Some(b"12\xff45"), &[]);
        assert!(result.is_spam);
        assert!(result.score <= 1.0);
    }

    #[test]
    fn test_classify_message() {
        let classifier = SpamClassifier::new().unwrap();
        let message = SmsMessage::new(1, "bahis").with_sender("12345");
        let result = classifier.classify_message(&message, &[]);
        assert!(result
            .detection_reasons
            .contains(&"Suspicious sender: 12345".to_string()));
    }
}
