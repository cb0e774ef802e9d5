//! CLI configuration

use crate::cli::Cli;
use smsguard_classifiers::{load_config, ClassifierConfig, KeywordMatching};
use tracing::debug;

/// Load classifier configuration from file and apply CLI overrides
///
/// A missing file is not an error; defaults are used instead.
pub fn load(cli: &Cli) -> anyhow::Result<ClassifierConfig> {
    let mut config = if cli.config.exists() {
        debug!("Loading configuration from {}", cli.config.display());
        load_config(&cli.config)?
    } else {
        debug!("No configuration at {}, using defaults", cli.config.display());
        ClassifierConfig::default()
    };

    if cli.word_boundary {
        config.matching = KeywordMatching::WordBoundary;
    }

    config.custom_keywords.extend(cli.keywords.iter().cloned());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_missing_file_uses_defaults() {
        let cli = Cli::try_parse_from([
            "smsguard",
            "--config",
            "/nonexistent/smsguard.yaml",
            "keywords",
        ])
        .unwrap();

        let config = load(&cli).unwrap();
        assert_eq!(config, ClassifierConfig::default());
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smsguard.yaml");
        std::fs::write(&path, "custom_keywords: [kampanya]\n").unwrap();

        let cli = Cli::try_parse_from([
            "smsguard",
            "--config",
            path.to_str().unwrap(),
            "--keyword",
            "indirim",
            "--word-boundary",
            "keywords",
        ])
        .unwrap();

        let config = load(&cli).unwrap();
        assert_eq!(config.matching, KeywordMatching::WordBoundary);
        assert_eq!(config.custom_keywords, vec!["kampanya", "indirim"]);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smsguard.yaml");
        std::fs::write(&path, "matching: sometimes\n").unwrap();

        let cli = Cli::try_parse_from(["smsguard", "--config", path.to_str().unwrap(), "keywords"])
            .unwrap();

        assert!(load(&cli).is_err());
    }
}
