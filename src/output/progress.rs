//! Progress reporting on stderr
//!
//! A spinner counts processed manifests while the scan runs. Nothing is drawn
//! in quiet mode or when progress is disabled.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

/// Spinner showing how many manifests have been processed
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter; `enabled = false` makes every call a no-op
    pub fn new(enabled: bool) -> Self {
        let spinner = enabled.then(|| {
            let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed}] {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message("Scanning for manifests...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        });

        Self { spinner }
    }

    /// Hidden reporter, used in tests and quiet mode
    pub fn hidden() -> Self {
        Self { spinner: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.spinner.is_some()
    }

    /// Record that `processed` manifests have been handled
    pub fn update(&self, processed: usize) {
        if let Some(spinner) = &self.spinner {
            spinner.set_position(processed as u64);
            spinner.set_message(format!("Processed {} manifests", processed));
        }
    }

    /// Stop the spinner and clear it from the terminal
    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}

/// Create a progress callback function that updates a ProgressReporter
pub fn create_progress_callback(reporter: Arc<ProgressReporter>) -> impl Fn(usize) + Send + Sync {
    move |processed: usize| reporter.update(processed)
}
