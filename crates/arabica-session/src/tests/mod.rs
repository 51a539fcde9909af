
use std::io;
use std::sync::{Arc, Mutex};

use super::{
    ClipboardError, ClipboardSink, KeyValueStore, MemoryStore, OcrError, OcrService, RuleStore,
    TransliterationSession,
};

pub(super) fn make_session() -> TransliterationSession<MemoryStore> {
    TransliterationSession::new(RuleStore::open(MemoryStore::new()))
}

/// Backend whose every call fails, like a full disk or a denied profile.
#[derive(Default)]
pub(super) struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }

    fn set(&mut self, _key: &str, _value: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "disk full"))
    }

    fn remove(&mut self, _key: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }
}

#[derive(Default)]
pub(super) struct RecordingClipboard {
    pub writes: Vec<String>,
    pub fail: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("no display".into()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Replays canned results and records the images it was asked about.
pub(super) struct ScriptedOcr {
    pub result: Result<String, OcrError>,
    pub seen: Mutex<Vec<Vec<u8>>>,
}

impl ScriptedOcr {
    pub fn new(result: Result<String, OcrError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl OcrService for ScriptedOcr {
    fn recognize(&self, image: &[u8]) -> Result<String, OcrError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(image.to_vec());
        }
        self.result.clone()
    }
}
