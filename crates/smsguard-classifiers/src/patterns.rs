//! Suspicious-pattern detection
//!
//! One canonical table of regular expressions run against the raw message
//! body. Each pattern that matches anywhere adds a fixed amount to the score.

use regex::{Regex, RegexBuilder};
use smsguard_core::{Error, Result};

/// Version of the pattern table below
pub const PATTERN_SET_VERSION: &str = "1";

/// Score added per matching pattern
pub const PATTERN_WEIGHT: f32 = 0.15;

/// Reason recorded per matching pattern
pub const PATTERN_REASON: &str = "Suspicious pattern detected";

/// (name, expression) pairs, matched case-insensitively
pub const SUSPICIOUS_PATTERNS: &[(&str, &str)] = &[
    ("money_amount", r"\b[0-9]{2,}\s*(tl|₺|lira)"),
    ("link", r"\b(www\.|http|https)"),
    ("percentage", r"\b[0-9]{2,}\s*%"),
    ("action_word", r"\b(tikla|kayit|kayıt|bonus|hemen|acele)"),
    ("promo_code", r"\b[0-9]{4}\s*kod"),
    ("international_number", r"\+[0-9]{1,3}\s*[0-9]{3,}"),
];

/// A compiled suspicious pattern
#[derive(Debug, Clone)]
pub struct SuspiciousPattern {
    name: &'static str,
    regex: Regex,
}

impl SuspiciousPattern {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// The compiled pattern table
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<SuspiciousPattern>,
}

impl PatternSet {
    /// Compile the canonical pattern table
    pub fn new() -> Result<Self> {
        let patterns = SUSPICIOUS_PATTERNS
            .iter()
            .map(|&(name, expr)| {
                RegexBuilder::new(expr)
                    .case_insensitive(true)
                    .build()
                    .map(|regex| SuspiciousPattern { name, regex })
                    .map_err(|e| {
                        Error::internal(format!("Failed to compile {} pattern: {}", name, e))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Names of the patterns that match `text`, in table order
    pub fn matching(&self, text: &str) -> Vec<&'static str> {
        self.patterns
            .iter()
            .filter(|p| p.is_match(text))
            .map(|p| p.name)
            .collect()
    }

    /// Score contribution of this signal, recording one reason per match
    pub fn score(&self, text: &str, reasons: &mut Vec<String>) -> f32 {
        let matched = self.matching(text);
        for _ in &matched {
            reasons.push(PATTERN_REASON.to_string());
        }
        matched.len() as f32 * PATTERN_WEIGHT
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new().expect("Failed to compile suspicious patterns")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(text: &str) -> Vec<&'static str> {
        PatternSet::new().unwrap().matching(text)
    }

    #[test]
    fn test_table_compiles() {
        let set = PatternSet::new().unwrap();
        assert_eq!(set.len(), SUSPICIOUS_PATTERNS.len());
    }

    #[test]
    fn test_money_amount() {
        assert_eq!(matches("500 TL hediye"), vec!["money_amount"]);
        assert_eq!(matches("1000₺ seni bekliyor"), vec!["money_amount"]);
        assert_eq!(matches("50 lira"), vec!["money_amount"]);
        assert!(matches("5 TL").is_empty());
    }

    #[test]
    fn test_link() {
        assert_eq!(matches("giris: www.ornek.com"), vec!["link"]);
        assert_eq!(matches("HTTPS://ornek.com"), vec!["link"]);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(matches("yuzde 50 % indirim"), vec!["percentage"]);
        assert_eq!(matches("100%"), vec!["percentage"]);
    }

    #[test]
    fn test_action_word() {
        assert_eq!(matches("Hemen gel"), vec!["action_word"]);
        assert_eq!(matches("KAYIT ol"), vec!["action_word"]);
        assert_eq!(matches("linke TIKLA"), vec!["action_word"]);
        // dotless ı is not folded onto i
        assert!(matches("linke tıkla").is_empty());
    }

    #[test]
    fn test_promo_code() {
        assert_eq!(matches("1234 kodunu gir"), vec!["promo_code"]);
        assert_eq!(matches("4321KOD"), vec!["promo_code"]);
    }

    #[test]
    fn test_international_number() {
        assert_eq!(matches("ara +90 5551234567"), vec!["international_number"]);
        assert!(matches("ara 5551234").is_empty());
    }

    #[test]
    fn test_clean_text() {
        assert!(matches("Yarin aksam yemege geliyor musun?").is_empty());
    }

    #[test]
    fn test_score_records_reason_per_pattern() {
        let set = PatternSet::new().unwrap();
        let mut reasons = Vec::new();
        let score = set.score("Hemen tikla: www.ornek.com 500 TL", &mut reasons);
        assert_eq!(reasons.len(), 3);
        assert!(reasons.iter().all(|r| r == PATTERN_REASON));
        assert!((score - 0.45).abs() < 1e-6);
    }
}
