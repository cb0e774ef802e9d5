//! Keyword catalog, normalization and matching

use serde::{Deserialize, Serialize};
use smsguard_core::{CaseFolder, Error, Result, TurkishCaseFolder};
use std::collections::HashSet;

/// Built-in gambling and marketing vocabulary, in evaluation order
const BUILTIN_KEYWORDS: &[&str] = &[
    "bahis",
    "kumar",
    "bet",
    "casino",
    "bonus",
    "freespin",
    "çevrim",
    "yatır",
    "kazanç",
    "slot",
    "rulet",
    "poker",
    "jackpot",
    "bedava",
    "para kazan",
    "deneme bonusu",
    "çevrimsiz",
    "hoşgeldin",
    "promosyon",
    "oyna",
    "kazan",
];

/// Shortest accepted keyword, in characters
pub const MIN_KEYWORD_LENGTH: usize = 2;

/// The built-in keyword list
pub fn builtin_keywords() -> &'static [&'static str] {
    BUILTIN_KEYWORDS
}

/// Check whether a term equals a built-in keyword under Turkish folding
pub fn is_builtin_keyword(term: &str) -> bool {
    let folder = TurkishCaseFolder;
    let normalized = folder.fold(term.trim());
    BUILTIN_KEYWORDS
        .iter()
        .any(|builtin| folder.fold(builtin) == normalized)
}

/// Where a keyword comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordKind {
    Builtin,
    Custom,
}

impl KeywordKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Custom => "custom",
        }
    }
}

/// A trimmed, Turkish-folded phrase of at least two characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Keyword(String);

impl Keyword {
    /// Normalize and validate a raw term
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::keyword("keyword is empty"));
        }

        let normalized = TurkishCaseFolder.fold(trimmed);
        if normalized.chars().count() < MIN_KEYWORD_LENGTH {
            return Err(Error::keyword(format!(
                "keyword '{}' is shorter than {} characters",
                trimmed, MIN_KEYWORD_LENGTH
            )));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Which list this keyword belongs to
    pub fn kind(&self) -> KeywordKind {
        if is_builtin_keyword(&self.0) {
            KeywordKind::Builtin
        } else {
            KeywordKind::Custom
        }
    }
}

impl TryFrom<String> for Keyword {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.0
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a keyword must occur in the message body to count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatching {
    /// Plain containment of the folded keyword
    #[default]
    Substring,
    /// Occurrence must not touch an alphanumeric character on either side
    WordBoundary,
}

impl KeywordMatching {
    /// Check whether `keyword` occurs in `haystack` (both already folded)
    pub fn matches(&self, haystack: &str, keyword: &str) -> bool {
        match self {
            Self::Substring => haystack.contains(keyword),
            Self::WordBoundary => contains_word(haystack, keyword),
        }
    }
}

fn contains_word(haystack: &str, word: &str) -> bool {
    haystack.match_indices(word).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.map_or(false, char::is_alphanumeric) && !after.map_or(false, char::is_alphanumeric)
    })
}

/// A keyword prepared for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Keyword as supplied, trimmed
    pub display: String,
    /// Folded form used for comparison
    pub folded: String,
    pub kind: KeywordKind,
}

/// Merge built-in and custom keywords into one ordered candidate list
///
/// Built-ins come first, then custom keywords in store order. Entries whose
/// folded form repeats an earlier entry, or is shorter than
/// [`MIN_KEYWORD_LENGTH`], are dropped.
pub fn candidate_keywords(folder: &dyn CaseFolder, custom_keywords: &[String]) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::with_capacity(BUILTIN_KEYWORDS.len() + custom_keywords.len());

    let builtin = BUILTIN_KEYWORDS.iter().map(|k| (*k, KeywordKind::Builtin));
    let custom = custom_keywords
        .iter()
        .map(|k| (k.as_str(), KeywordKind::Custom));

    for (raw, kind) in builtin.chain(custom) {
        let display = raw.trim();
        let folded = folder.fold(display);
        if folded.chars().count() < MIN_KEYWORD_LENGTH {
            continue;
        }
        if seen.insert(folded.clone()) {
            candidates.push(Candidate {
                display: display.to_string(),
                folded,
                kind,
            });
        }
    }

    candidates
}
