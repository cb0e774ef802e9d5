use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "smsguard")]
#[command(author, version, about = "Heuristic spam scoring for SMS messages")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "smsguard.yaml", env = "SMSGUARD_CONFIG")]
    pub config: PathBuf,

    /// Extra custom keyword (repeatable)
    #[arg(short, long = "keyword", global = true)]
    pub keywords: Vec<String>,

    /// Require keywords to match whole words
    #[arg(long, global = true)]
    pub word_boundary: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a single message
    Classify {
        /// Message body
        #[arg(short, long)]
        body: String,

        /// Sender address or short code
        #[arg(short, long)]
        sender: Option<String>,
    },

    /// Classify every message in a JSON-lines file
    Scan {
        /// Input file, one {"id","sender","body"} object per line
        #[arg(short, long)]
        input: PathBuf,

        /// Print only messages classified as spam
        #[arg(long)]
        spam_only: bool,

        /// Number of most frequent senders listed in the summary
        #[arg(long, default_value_t = 20)]
        top_senders: usize,
    },

    /// List built-in and custom keywords
    Keywords,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify() {
        let cli = Cli::try_parse_from([
            "smsguard", "-k", "kampanya", "classify", "--body", "bahis", "--sender", "12345",
        ])
        .unwrap();

        assert_eq!(cli.keywords, vec!["kampanya"]);
        assert!(!cli.word_boundary);
        match cli.command {
            Commands::Classify { body, sender } => {
                assert_eq!(body, "bahis");
                assert_eq!(sender.as_deref(), Some("12345"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_scan_with_global_flags() {
        let cli = Cli::try_parse_from([
            "smsguard", "scan", "--input", "inbox.jsonl", "--spam-only", "--word-boundary",
        ])
        .unwrap();

        assert!(cli.word_boundary);
        assert!(matches!(
            cli.command,
            Commands::Scan {
                spam_only: true,
                top_senders: 20,
                ..
            }
        ));
    }

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["smsguard"]).is_err());
    }
}
