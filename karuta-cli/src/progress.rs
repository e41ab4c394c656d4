//! Terminal progress display for imports.

use indicatif::{ProgressBar, ProgressStyle};
use karuta_import::ImportProgress;

/// Shows chunk and image progress on a single bar.
pub(crate) struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    /// When `quiet` is true the bar is hidden.
    pub(crate) fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(0)
        };
        let style = ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self { bar }
    }

    fn track(&self, done: usize, total: usize) {
        if self.bar.length() != Some(total as u64) {
            self.bar.set_length(total as u64);
        }
        self.bar.set_position(done as u64);
    }

    /// Drop the bar without a final message, e.g. when an import fails.
    pub(crate) fn abandon(&self) {
        self.bar.finish_and_clear();
    }
}

impl ImportProgress for BarProgress {
    fn on_chunk(&self, processed: usize, total: usize) {
        self.track(processed, total);
        self.bar.set_message("cards saved");
    }

    fn on_phase(&self, message: &str) {
        self.bar.println(format!("{message}..."));
        self.bar.set_position(0);
    }

    fn on_image(&self, done: usize, total: usize, name: &str) {
        self.track(done, total);
        self.bar.set_message(name.to_string());
    }

    fn on_complete(&self, _message: &str) {
        self.bar.finish_and_clear();
    }
}
