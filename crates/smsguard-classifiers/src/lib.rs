//! SMSGuard Classifiers
//!
//! Heuristic spam scoring for short text messages.
//!
//! A message is scored from four additive signal groups:
//! - Keywords (built-in gambling/marketing vocabulary plus user keywords),
//!   weighted by message length
//! - Suspicious patterns such as money amounts, links and promo codes
//! - Sender shape
//! - Message characteristics such as urgency and shouting
//!
//! Classification is pure and infallible: it performs no I/O, holds no
//! mutable state and can be called from any number of threads at once.

pub mod characteristics;
pub mod classifier;
pub mod config;
pub mod context;
pub mod keywords;
pub mod patterns;
pub mod scanner;
pub mod sender;
pub mod source;
pub mod spam;
pub mod store;

pub use classifier::{ClassificationResult, Classifier, SpamCategory};
pub use config::{load_config, CaseFoldingSpec, ClassifierConfig};
pub use context::{ContextMetrics, LengthCategory};
pub use keywords::{builtin_keywords, is_builtin_keyword, Keyword, KeywordKind, KeywordMatching};
pub use patterns::PATTERN_SET_VERSION;
pub use scanner::{ScanReport, ScanSummary, ScannedMessage, SenderStats, SpamScanner};
pub use sender::is_known_spam_number;
pub use source::{JsonLinesSource, MessageSource, VecMessageSource};
pub use spam::SpamClassifier;
pub use store::{InMemoryKeywordStore, KeywordStore, SharedKeywordStore};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{ClassificationResult, Classifier, SpamCategory};
    pub use crate::keywords::KeywordMatching;
    pub use crate::scanner::SpamScanner;
    pub use crate::source::MessageSource;
    pub use crate::spam::SpamClassifier;
    pub use crate::store::{InMemoryKeywordStore, KeywordStore, SharedKeywordStore};
}
