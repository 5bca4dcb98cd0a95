//! Spinner shown while the action layer is resolving

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for the pending window between submit and resolution.
///
/// The panels freeze their input while a submission is in flight; the
/// spinner is the visible counterpart of that state.
pub struct PendingSpinner {
    bar: ProgressBar,
}

impl PendingSpinner {
    /// Start a spinner with the given message.
    pub fn start(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Stop and erase the spinner.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
