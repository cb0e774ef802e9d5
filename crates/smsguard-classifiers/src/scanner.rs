//! Batch scanning of message sources

use crate::classifier::{ClassificationResult, Classifier, SpamCategory};
use crate::sender::is_known_spam_number;
use crate::source::MessageSource;
use serde::{Deserialize, Serialize};
use smsguard_core::{Result, SmsMessage};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// A message together with its verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannedMessage {
    pub message: SmsMessage,
    pub result: ClassificationResult,
    pub category: SpamCategory,
    /// Sender falls in a well-known marketing number range
    pub known_spam_number: bool,
}

/// Counts over one scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total: usize,
    pub spam: usize,
    pub not_spam: usize,
    /// Source entries that could not be read as messages
    pub skipped: usize,
    pub high_risk: usize,
    pub likely: usize,
    pub possible: usize,
}

impl ScanSummary {
    fn record(&mut self, category: SpamCategory) {
        self.total += 1;
        match category {
            SpamCategory::HighRisk => self.high_risk += 1,
            SpamCategory::Likely => self.likely += 1,
            SpamCategory::Possible => self.possible += 1,
            SpamCategory::NotSpam => {
                self.not_spam += 1;
                return;
            }
        }
        self.spam += 1;
    }
}

/// Message counts for one sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderStats {
    /// Sender as displayed, `"Unknown"` when the message had none
    pub sender: String,
    pub total: usize,
    pub spam: usize,
}

impl SenderStats {
    fn new(sender: &str) -> Self {
        Self {
            sender: sender.to_string(),
            total: 0,
            spam: 0,
        }
    }

    /// Share of this sender's messages classified as spam, in percent
    pub fn spam_percentage(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.spam as f32 / self.total as f32 * 100.0
    }
}

/// Output of [`SpamScanner::scan`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub results: Vec<ScannedMessage>,
    pub summary: ScanSummary,
    /// Per-sender counts, most frequent sender first
    pub senders: Vec<SenderStats>,
}

impl ScanReport {
    /// Only the messages classified as spam
    pub fn spam(&self) -> impl Iterator<Item = &ScannedMessage> {
        self.results.iter().filter(|m| m.result.is_spam)
    }

    /// The `limit` most frequent senders
    pub fn top_senders(&self, limit: usize) -> &[SenderStats] {
        &self.senders[..limit.min(self.senders.len())]
    }
}

/// Classifies every message from a source against one keyword snapshot
pub struct SpamScanner {
    classifier: Arc<dyn Classifier>,
}

impl SpamScanner {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub fn scan<S>(&self, source: &mut S, custom_keywords: &[String]) -> Result<ScanReport>
    where
        S: MessageSource + ?Sized,
    {
        let start = Instant::now();
        let messages = source.messages()?;
        let mut summary = ScanSummary {
            skipped: source.skipped(),
            ..Default::default()
        };
        let mut senders: HashMap<String, SenderStats> = HashMap::new();

        let results = messages
            .into_iter()
            .map(|message| {
                let result = self.classifier.classify(
                    &message.body,
                    message.sender.as_deref(),
                    custom_keywords,
                );
                let category = result.category();
                summary.record(category);

                let stats = senders
                    .entry(message.sender_name().to_string())
                    .or_insert_with_key(|name| SenderStats::new(name));
                stats.total += 1;
                if result.is_spam {
                    stats.spam += 1;
                }

                metrics::counter!("smsguard_messages_classified_total").increment(1);
                metrics::histogram!("smsguard_spam_score").record(result.score as f64);
                if result.is_spam {
                    metrics::counter!("smsguard_spam_detected_total", "category" => category.label())
                        .increment(1);
                }

                let known_spam_number = message
                    .sender
                    .as_deref()
                    .map_or(false, is_known_spam_number);

                ScannedMessage {
                    message,
                    result,
                    category,
                    known_spam_number,
                }
            })
            .collect();

        let mut senders: Vec<SenderStats> = senders.into_values().collect();
        senders.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.sender.cmp(&b.sender)));

        info!(
            classifier = self.classifier.name(),
            total = summary.total,
            spam = summary.spam,
            skipped = summary.skipped,
            senders = senders.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Scan complete"
        );

        Ok(ScanReport {
            results,
            summary,
            senders,
        })
    }
}
