use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::ocr::{OcrError, OcrService};
use crate::ScanTicket;

struct ScanWork {
    ticket: ScanTicket,
    image: Vec<u8>,
}

/// A finished recognition for `ticket`.
#[derive(Debug)]
pub struct ScanResult {
    pub ticket: ScanTicket,
    pub result: Result<String, OcrError>,
}

/// Runs an [`OcrService`] off the caller's thread.
///
/// Only the most recent submission is current: submitting or cancelling
/// moves the generation on, and results for older generations are dropped
/// both on the worker and in [`ScanWorker::try_recv`].
pub struct ScanWorker {
    work_tx: mpsc::Sender<ScanWork>,
    result_rx: Mutex<mpsc::Receiver<ScanResult>>,
    generation: Arc<AtomicU64>,
}

impl ScanWorker {
    pub fn new(service: Arc<dyn OcrService>) -> io::Result<Self> {
        let generation = Arc::new(AtomicU64::new(0));
        let (work_tx, work_rx) = mpsc::channel::<ScanWork>();
        let (result_tx, result_rx) = mpsc::channel::<ScanResult>();
        {
            let generation = Arc::clone(&generation);
            thread::Builder::new()
                .name("arabica-scan".into())
                .spawn(move || scan_worker(work_rx, result_tx, generation, service))?;
        }
        Ok(Self {
            work_tx,
            result_rx: Mutex::new(result_rx),
            generation,
        })
    }

    pub fn submit(&self, ticket: ScanTicket, image: Vec<u8>) {
        self.generation.store(ticket.generation(), Ordering::SeqCst);
        let _ = self.work_tx.send(ScanWork { ticket, image });
    }

    /// Invalidate the pending submission, if any.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn is_current(&self, ticket: ScanTicket) -> bool {
        ticket.generation() == self.generation.load(Ordering::SeqCst)
    }

    pub fn try_recv(&self) -> Option<ScanResult> {
        let rx = self.result_rx.lock().ok()?;
        while let Ok(result) = rx.try_recv() {
            if self.is_current(result.ticket) {
                return Some(result);
            }
        }
        None
    }

    /// Wait up to `timeout` for the current result.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ScanResult> {
        let rx = self.result_rx.lock().ok()?;
        loop {
            let result = rx.recv_timeout(timeout).ok()?;
            if self.is_current(result.ticket) {
                return Some(result);
            }
        }
    }
}

fn scan_worker(
    rx: mpsc::Receiver<ScanWork>,
    tx: mpsc::Sender<ScanResult>,
    generation: Arc<AtomicU64>,
    service: Arc<dyn OcrService>,
) {
    while let Ok(work) = rx.recv() {
        // Drain: skip to the latest submission
        let mut latest = work;
        while let Ok(newer) = rx.try_recv() {
            latest = newer;
        }

        if latest.ticket.generation() != generation.load(Ordering::SeqCst) {
            continue;
        }

        let result = service.recognize(&latest.image);

        if latest.ticket.generation() != generation.load(Ordering::SeqCst) {
            debug!(ticket = latest.ticket.generation(), "scan result discarded");
            continue;
        }

        let _ = tx.send(ScanResult {
            ticket: latest.ticket,
            result,
        });
    }
}
