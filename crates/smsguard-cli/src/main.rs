//! SMSGuard CLI
//!
//! Scores SMS messages for spam from the command line, one at a time or in
//! bulk from a JSON-lines export.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use smsguard_classifiers::{
    is_known_spam_number, ClassificationResult, Classifier, JsonLinesSource, Keyword,
    KeywordStore, ScanSummary, SenderStats, SpamCategory, SpamClassifier, SpamScanner,
    PATTERN_SET_VERSION,
};
use std::io::Write;
use std::sync::Arc;
use tracing::info;

mod cli;
mod config;

use cli::{Cli, Commands};

/// Single-message output
#[derive(Serialize)]
struct ClassifyOutput<'a> {
    pattern_set_version: &'static str,
    sender: Option<&'a str>,
    category: SpamCategory,
    known_spam_number: bool,
    #[serde(flatten)]
    result: &'a ClassificationResult,
}

/// Trailing line of `scan` output
#[derive(Serialize)]
struct ScanTotals<'a> {
    pattern_set_version: &'static str,
    #[serde(flatten)]
    summary: &'a ScanSummary,
    top_senders: &'a [SenderStats],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json_logs);

    let config = config::load(&cli)?;
    let store = config.keyword_store();
    let custom_keywords = store.custom_keywords();
    let classifier = SpamClassifier::from_config(&config)?;

    info!(
        matching = ?classifier.matching(),
        case_folding = classifier.case_folder().name(),
        pattern_set_version = PATTERN_SET_VERSION,
        custom_keywords = custom_keywords.len(),
        "Classifier ready"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Classify { body, sender } => {
            let result = classifier.classify(body, sender.as_deref(), &custom_keywords);
            let output = ClassifyOutput {
                pattern_set_version: PATTERN_SET_VERSION,
                sender: sender.as_deref(),
                category: result.category(),
                known_spam_number: sender.as_deref().map_or(false, is_known_spam_number),
                result: &result,
            };
            serde_json::to_writer_pretty(&mut out, &output)?;
            writeln!(out)?;
        }

        Commands::Scan {
            input,
            spam_only,
            top_senders,
        } => {
            let mut source = JsonLinesSource::open(input)?;
            let scanner = SpamScanner::new(Arc::new(classifier));
            let report = scanner.scan(&mut source, &custom_keywords)?;

            for scanned in report.results.iter().filter(|m| !spam_only || m.result.is_spam) {
                serde_json::to_writer(&mut out, scanned)?;
                writeln!(out)?;
            }
            let totals = ScanTotals {
                pattern_set_version: PATTERN_SET_VERSION,
                summary: &report.summary,
                top_senders: report.top_senders(*top_senders),
            };
            serde_json::to_writer(&mut out, &totals)?;
            writeln!(out)?;
        }

        Commands::Keywords => {
            for term in store.all_keywords() {
                let keyword = Keyword::parse(&term)?;
                writeln!(out, "{}\t{}", keyword.kind().label(), keyword)?;
            }
        }
    }

    Ok(())
}

/// Initialize tracing/logging
///
/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool, json: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("smsguard=debug")
    } else {
        EnvFilter::try_from_env("SMSGUARD_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("smsguard=warn"))
    };

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
