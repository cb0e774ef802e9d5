//! Configuration for the spam classifier

use crate::keywords::KeywordMatching;
use crate::store::InMemoryKeywordStore;
use serde::{Deserialize, Serialize};
use smsguard_core::{CaseFolder, Error, Result, TurkishCaseFolder, UnicodeCaseFolder};
use std::path::Path;
use std::sync::Arc;

/// Classifier configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Keyword matching mode
    #[serde(default)]
    pub matching: KeywordMatching,

    /// Case-folding rule set for keyword normalization
    #[serde(default)]
    pub case_folding: CaseFoldingSpec,

    /// Custom keywords to seed the keyword store with
    #[serde(default)]
    pub custom_keywords: Vec<String>,
}

/// Case-folding specification (for config files)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFoldingSpec {
    #[default]
    Turkish,
    Unicode,
}

impl CaseFoldingSpec {
    /// Convert to a runtime case folder
    pub fn to_case_folder(&self) -> Arc<dyn CaseFolder> {
        match self {
            Self::Turkish => Arc::new(TurkishCaseFolder),
            Self::Unicode => Arc::new(UnicodeCaseFolder),
        }
    }
}

impl ClassifierConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml(&content)?)
    }

    /// Build a keyword store seeded with the configured custom keywords
    ///
    /// Entries the store rejects are logged and skipped.
    pub fn keyword_store(&self) -> InMemoryKeywordStore {
        InMemoryKeywordStore::with_keywords(&self.custom_keywords)
    }
}

/// Load classifier configuration from file
pub fn load_config(path: impl AsRef<Path>) -> Result<ClassifierConfig> {
    ClassifierConfig::from_file(path.as_ref())
        .map_err(|e| Error::config(format!("Failed to load classifier config: {}", e)))
}
