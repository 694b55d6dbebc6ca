// src/progress.rs
/// Lightweight progress reporting for the iterative extractor (one event
/// per secondary page). The CLI implements this to surface status to users;
/// it is presentation only and never feeds back into extraction.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one item's page was fetched and extracted.
    fn item_done(&mut self, _label: &str) {}

    /// Called when one item's page fetch failed and the item was skipped.
    fn item_skipped(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
