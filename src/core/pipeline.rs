//! Scan pipeline wiring
//!
//! Walker, dispatcher and collector run concurrently and talk only through
//! two bounded channels. The run finishes when the walk is exhausted, every
//! worker has exited and the collector has drained the outcome channel.

use crate::core::collector::{self, ProgressFn};
use crate::core::dispatcher::Dispatcher;
use crate::core::filter::PathFilter;
use crate::core::walker::Walker;
use crate::error::{Result, ScanError};
use crate::models::config::Settings;
use crate::models::results::ScanResults;
use crossbeam::channel;
use std::thread;
use std::time::Instant;

/// One configured scan
pub struct Pipeline {
    settings: Settings,
}

impl Pipeline {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the scan to completion
    pub fn run(&self) -> Result<ScanResults> {
        self.execute(None)
    }

    /// Run the scan, reporting the number of manifests processed so far
    pub fn run_with_progress<F>(&self, progress: F) -> Result<ScanResults>
    where
        F: Fn(usize) + Send + Sync,
    {
        self.execute(Some(&progress))
    }

    fn execute(&self, progress: Option<&ProgressFn<'_>>) -> Result<ScanResults> {
        if self.settings.paths.is_empty() {
            return Err(ScanError::config_error("At least one root path is required"));
        }

        let start_time = Instant::now();
        let filter = PathFilter::new(&self.settings.includes, &self.settings.excludes);
        if filter.allows_nothing() {
            log::warn!(
                "No supported ecosystem matches includes {:?}; nothing will be scanned",
                self.settings.includes
            );
        }

        let walker = Walker::new(self.settings.paths.clone(), filter)
            .follow_links(self.settings.follow_links);
        let dispatcher = Dispatcher::new(self.settings.workers);
        let capacity = self.settings.queue_capacity;

        log::debug!(
            "Scanning {} root(s) with {} workers",
            self.settings.paths.len(),
            dispatcher.workers()
        );

        let (path_tx, path_rx) = channel::bounded(capacity);
        let (outcome_tx, outcome_rx) = channel::bounded(capacity);

        let (results, dispatched) = thread::scope(|scope| {
            let collector = scope.spawn(move || collector::collect(outcome_rx, progress));
            let dispatch = scope.spawn(move || dispatcher.run(path_rx, outcome_tx));

            walker.walk_into(path_tx);

            let dispatched = dispatch
                .join()
                .map_err(|_| ScanError::pipeline_error("Worker pool panicked"))
                .and_then(|result| result);
            let results = collector
                .join()
                .map_err(|_| ScanError::pipeline_error("Collector panicked"));

            (results, dispatched)
        });

        dispatched?;
        let mut results = results?;
        results.set_scan_duration(start_time.elapsed());

        log::debug!(
            "Parsed {} manifests ({} failed), {} dependencies in {}",
            results.summary.manifests_parsed,
            results.summary.manifests_failed,
            results.summary.dependencies_found,
            results.summary.format_duration()
        );

        Ok(results)
    }
}
