//! Message sources
//!
//! Sources hand over already-extracted messages; how they were received is
//! outside this crate.

use smsguard_core::{Error, Result, SmsMessage};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Supplies messages to classify
pub trait MessageSource {
    /// Drain the next batch of messages
    fn messages(&mut self) -> Result<Vec<SmsMessage>>;

    /// Entries the source could not turn into messages
    fn skipped(&self) -> usize {
        0
    }
}

/// In-memory message source
#[derive(Debug, Clone, Default)]
pub struct VecMessageSource {
    messages: Vec<SmsMessage>,
}

impl VecMessageSource {
    pub fn new(messages: Vec<SmsMessage>) -> Self {
        Self { messages }
    }
}

impl MessageSource for VecMessageSource {
    fn messages(&mut self) -> Result<Vec<SmsMessage>> {
        Ok(std::mem::take(&mut self.messages))
    }
}

/// Reads one JSON-encoded [`SmsMessage`] per line
///
/// Blank lines are ignored. Lines that fail to parse are logged and skipped.
pub struct JsonLinesSource<R> {
    reader: R,
    skipped: usize,
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, skipped: 0 }
    }
}

impl JsonLinesSource<BufReader<File>> {
    /// Open a JSON-lines file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::message_source(format!("Failed to open {}: {}", path.display(), e))
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> MessageSource for JsonLinesSource<R> {
    fn messages(&mut self) -> Result<Vec<SmsMessage>> {
        let mut messages = Vec::new();
        let mut line = Vec::new();
        let mut line_no = 0usize;

        loop {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            line_no += 1;

            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            // Invalid UTF-8 surfaces here as a parse error, not an I/O error
            match serde_json::from_slice::<SmsMessage>(&line) {
                Ok(message) => messages.push(message),
                Err(e) => {
                    warn!("Skipping line {}: {}", line_no, e);
                    self.skipped += 1;
                }
            }
        }

        Ok(messages)
    }

    fn skipped(&self) -> usize {
        self.skipped
    }
}
