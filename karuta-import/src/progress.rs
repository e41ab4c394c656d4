//! Import progress reporting.

/// Trait for receiving import progress updates.
pub trait ImportProgress {
    /// Called after each chunk is merged and persisted.
    fn on_chunk(&self, processed: usize, total: usize);

    /// Called when a phase starts (e.g., "Looking up images").
    fn on_phase(&self, message: &str);

    /// Called after each image lookup settles.
    fn on_image(&self, done: usize, total: usize, name: &str) {
        let _ = (done, total, name);
    }

    /// Called when the import is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_chunk(&self, _processed: usize, _total: usize) {}
    fn on_phase(&self, _message: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_chunk(&self, processed: usize, total: usize) {
        log::info!("  [{}/{}] cards imported", processed, total);
    }

    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_image(&self, done: usize, total: usize, name: &str) {
        log::debug!("  [{}/{}] image for {}", done, total, name);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
