//! Locale-aware case folding
//!
//! Keyword matching depends on how text is lowercased. Turkish distinguishes
//! dotted and dotless I, so a generic lowercase maps `I` to `i` where Turkish
//! text expects `ı`. Folding is injected explicitly instead of relying on a
//! process-wide locale.

/// Lowercases text according to a fixed rule set
pub trait CaseFolder: Send + Sync {
    /// Fold the given text to lowercase
    fn fold(&self, text: &str) -> String;

    /// Short identifier of the rule set
    fn name(&self) -> &str;
}

/// Combining dot above, as in a decomposed `İ`
const COMBINING_DOT_ABOVE: char = '\u{307}';

/// Turkish case folding (`I` → `ı`, `İ` → `i`)
///
/// A decomposed `I` followed by a combining dot above folds to a plain `i`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurkishCaseFolder;

impl CaseFolder for TurkishCaseFolder {
    fn fold(&self, text: &str) -> String {
        let mut folded = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                'I' if chars.peek() == Some(&COMBINING_DOT_ABOVE) => {
                    chars.next();
                    folded.push('i');
                }
                'I' => folded.push('ı'),
                'İ' => folded.push('i'),
                _ => folded.extend(ch.to_lowercase()),
            }
        }
        folded
    }

    fn name(&self) -> &str {
        "turkish"
    }
}

/// Locale-neutral Unicode lowercase
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeCaseFolder;

impl CaseFolder for UnicodeCaseFolder {
    fn fold(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &str {
        "unicode"
    }
}
