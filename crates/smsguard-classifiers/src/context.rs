//! Length-based context for the keyword signal
//!
//! A keyword in a two-word SMS says far more than the same keyword buried in
//! a paragraph. The keyword subtotal is scaled by a multiplier picked from the
//! trimmed message length:
//!
//! | length    | category | multiplier |
//! |-----------|----------|------------|
//! | <= 50     | Short    | 1.5        |
//! | 51 - 150  | Medium   | 1.0        |
//! | > 150     | Long     | 0.6        |

use serde::{Deserialize, Serialize};

/// Longest message still treated as short
pub const SHORT_MESSAGE_MAX: usize = 50;

/// Longest message still treated as medium
pub const MEDIUM_MESSAGE_MAX: usize = 150;

/// Message length bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthCategory {
    /// No analysis ran (empty input)
    #[default]
    Unknown,
    Short,
    Medium,
    Long,
}

impl LengthCategory {
    /// Bucket a message by its length in characters
    pub fn from_length(length: usize) -> Self {
        if length <= SHORT_MESSAGE_MAX {
            Self::Short
        } else if length <= MEDIUM_MESSAGE_MAX {
            Self::Medium
        } else {
            Self::Long
        }
    }

    /// Multiplier applied to the keyword subtotal
    pub fn multiplier(&self) -> f32 {
        match self {
            Self::Short => 1.5,
            Self::Medium | Self::Unknown => 1.0,
            Self::Long => 0.6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Short => "short message — amplified spam score",
            Self::Medium => "medium message — normal spam score",
            Self::Long => "long message — reduced spam score",
        }
    }

    /// Extra reason recorded when at least one keyword matched
    pub fn keyword_reason(&self) -> Option<&'static str> {
        match self {
            Self::Short => Some("keyword in short message — high risk"),
            Self::Long => Some("single keyword in long message — low risk"),
            Self::Medium | Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for LengthCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How the input's length influenced scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextMetrics {
    /// Trimmed message length in characters
    pub message_length: usize,

    /// Number of matched keywords
    pub keyword_count: usize,

    /// Matches per 100 characters
    pub keyword_density: f32,

    pub length_category: LengthCategory,

    pub context_multiplier: f32,

    pub context_description: String,
}

impl ContextMetrics {
    /// Metrics for a message of `message_length` characters with
    /// `keyword_count` matches
    pub fn for_message(message_length: usize, keyword_count: usize) -> Self {
        let category = LengthCategory::from_length(message_length);
        let keyword_density = if message_length > 0 {
            keyword_count as f32 * 100.0 / message_length as f32
        } else {
            0.0
        };

        Self {
            message_length,
            keyword_count,
            keyword_density,
            length_category: category,
            context_multiplier: category.multiplier(),
            context_description: category.description().to_string(),
        }
    }
}

impl Default for ContextMetrics {
    fn default() -> Self {
        Self {
            message_length: 0,
            keyword_count: 0,
            keyword_density: 0.0,
            length_category: LengthCategory::Unknown,
            context_multiplier: 1.0,
            context_description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_boundaries() {
        assert_eq!(LengthCategory::from_length(1), LengthCategory::Short);
        assert_eq!(LengthCategory::from_length(50), LengthCategory::Short);
        assert_eq!(LengthCategory::from_length(51), LengthCategory::Medium);
        assert_eq!(LengthCategory::from_length(150), LengthCategory::Medium);
        assert_eq!(LengthCategory::from_length(151), LengthCategory::Long);
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(LengthCategory::Short.multiplier(), 1.5);
        assert_eq!(LengthCategory::Medium.multiplier(), 1.0);
        assert_eq!(LengthCategory::Long.multiplier(), 0.6);
    }

    #[test]
    fn test_keyword_reason_only_for_short_and_long() {
        assert!(LengthCategory::Short.keyword_reason().is_some());
        assert!(LengthCategory::Medium.keyword_reason().is_none());
        assert!(LengthCategory::Long.keyword_reason().is_some());
    }

    #[test]
    fn test_density() {
        let metrics = ContextMetrics::for_message(200, 2);
        assert_eq!(metrics.keyword_density, 1.0);
        assert_eq!(metrics.length_category, LengthCategory::Long);
        assert_eq!(metrics.context_description, "long message — reduced spam score");
    }

    #[test]
    fn test_default_is_zeroed() {
        let metrics = ContextMetrics::default();
        assert_eq!(metrics.message_length, 0);
        assert_eq!(metrics.keyword_count, 0);
        assert_eq!(metrics.keyword_density, 0.0);
        assert_eq!(metrics.length_category, LengthCategory::Unknown);
    }
}
