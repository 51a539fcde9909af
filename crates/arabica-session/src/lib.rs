//! Stateful transliteration session over a persisted rule table.
//!
//! `TransliterationSession` owns the rule store, the current direction and
//! the input/output pair. Every input change or rule edit recomputes the
//! output synchronously; image scans are tracked by ticket so that a late
//! result never overwrites newer input.

pub mod clipboard;
pub mod ocr;
pub mod scan_worker;
pub mod store;

#[cfg(test)]
mod tests;

use arabica_core::rules::RuleCategory;
use arabica_core::{reverse_transliterate, transliterate, Config};
use tracing::debug;

pub use clipboard::{ClipboardError, ClipboardSink};
pub use ocr::{OcrError, OcrService};
pub use scan_worker::{ScanResult, ScanWorker};
pub use store::{FileStore, KeyValueStore, MemoryStore, RuleStore, StoreError, STORAGE_KEY};

pub const SAMPLE_ARABIC: &str =
    "اَللّٰهُمَّ اِنِّيْ اَسْأَلُكَ اَنْ تَرْزُقَنِيْ رِزْقًا حَلاَلاً وَاسِعًا طَيِّبًا";
pub const SAMPLE_LATIN: &str =
    "Allâhumma innî as-aluka an tarzuqanî rizqan ḫalâlan wâsi'an thayyiban";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    ArabicToLatin,
    LatinToArabic,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::ArabicToLatin => Direction::LatinToArabic,
            Direction::LatinToArabic => Direction::ArabicToLatin,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("image scan is only available for Arabic input")]
    ScanUnavailable,
}

/// Identifies one scan request. A newer ticket supersedes older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTicket(u64);

impl ScanTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The recognized text replaced the input.
    Applied,
    /// The image held no usable text.
    NoText,
    Failed(OcrError),
    /// The ticket was cancelled or superseded; the result was ignored.
    Stale,
}

pub struct TransliterationSession<B: KeyValueStore> {
    store: RuleStore<B>,
    config: Config,
    direction: Direction,
    input: String,
    output: String,

    scan_generation: u64,
    pending_scan: Option<u64>,
}

impl<B: KeyValueStore> TransliterationSession<B> {
    pub fn new(store: RuleStore<B>) -> Self {
        let config = store.config();
        Self {
            store,
            config,
            direction: Direction::default(),
            input: String::new(),
            output: String::new(),
            scan_generation: 0,
            pending_scan: None,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn store(&self) -> &RuleStore<B> {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the input and return the recomputed output.
    pub fn set_input(&mut self, text: impl Into<String>) -> &str {
        self.input = text.into();
        self.recompute();
        &self.output
    }

    /// Flip direction. Both sides are cleared and any pending scan dropped.
    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
        self.pending_scan = None;
        self.input.clear();
        self.output.clear();
        debug!(direction = ?self.direction, "direction toggled");
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
    }

    pub fn update_rule(
        &mut self,
        category: RuleCategory,
        index: usize,
        latin: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.store.update(category, index, latin)?;
        self.refresh_config();
        Ok(())
    }

    pub fn reset_rules(&mut self) {
        self.store.reset();
        self.refresh_config();
    }

    /// Built-in sample text for the current direction.
    pub fn sample_input(&self) -> &'static str {
        match self.direction {
            Direction::ArabicToLatin => SAMPLE_ARABIC,
            Direction::LatinToArabic => SAMPLE_LATIN,
        }
    }

    /// Write the output to `sink`. `Ok(false)` when there is nothing to copy.
    pub fn copy_output(&self, sink: &mut dyn ClipboardSink) -> Result<bool, ClipboardError> {
        if self.output.is_empty() {
            return Ok(false);
        }
        sink.write_text(&self.output)?;
        Ok(true)
    }

    /// Start an image scan, superseding any pending one.
    pub fn begin_scan(&mut self) -> Result<ScanTicket, SessionError> {
        if self.direction != Direction::ArabicToLatin {
            return Err(SessionError::ScanUnavailable);
        }
        self.scan_generation += 1;
        self.pending_scan = Some(self.scan_generation);
        Ok(ScanTicket(self.scan_generation))
    }

    pub fn cancel_scan(&mut self) {
        self.pending_scan = None;
    }

    /// Deliver the result of the scan identified by `ticket`.
    pub fn complete_scan(
        &mut self,
        ticket: ScanTicket,
        result: Result<String, OcrError>,
    ) -> ScanOutcome {
        if self.pending_scan != Some(ticket.0) {
            debug!(ticket = ticket.0, "stale scan result ignored");
            return ScanOutcome::Stale;
        }
        self.pending_scan = None;
        match result {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return ScanOutcome::NoText;
                }
                self.set_input(text);
                ScanOutcome::Applied
            }
            Err(OcrError::NoTextFound) => ScanOutcome::NoText,
            Err(e) => ScanOutcome::Failed(e),
        }
    }

    fn refresh_config(&mut self) {
        self.config = self.store.config();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.output = if self.input.trim().is_empty() {
            String::new()
        } else {
            match self.direction {
                Direction::ArabicToLatin => transliterate(&self.input, &self.config),
                Direction::LatinToArabic => reverse_transliterate(&self.input, &self.config),
            }
        };
    }
}
