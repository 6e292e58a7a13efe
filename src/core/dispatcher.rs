//! Extraction worker pool
//!
//! A fixed number of workers pull candidate paths from the walker, read each
//! file, run the matching extractor and push one outcome per path. Failures
//! stay inside their outcome; the pool itself only fails if it cannot start.

use crate::error::{ManifestResultExt, Result, ScanError};
use crate::models::dependency::ManifestParseOutcome;
use crate::models::ecosystem::Ecosystem;
use crossbeam::channel::{Receiver, Sender};
use std::fs;
use std::path::{Path, PathBuf};

/// Bounded pool of extraction workers
#[derive(Debug, Clone)]
pub struct Dispatcher {
    workers: usize,
}

impl Dispatcher {
    /// Create a dispatcher with `workers` concurrent workers (at least one)
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Drain `paths` with the worker pool, sending one outcome per path.
    ///
    /// Returns after every worker has exited. `outcomes` is consumed, so the
    /// outcome channel closes as soon as this returns.
    pub fn run(&self, paths: Receiver<PathBuf>, outcomes: Sender<ManifestParseOutcome>) -> Result<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("depwalker-worker-{}", i))
            .build()
            .map_err(|e| ScanError::pipeline_error(format!("Failed to build worker pool: {}", e)))?;

        pool.scope(|scope| {
            for worker in 0..self.workers {
                let paths = paths.clone();
                let outcomes = outcomes.clone();
                scope.spawn(move |_| worker_loop(worker, paths, outcomes));
            }
        });

        drop(outcomes);
        log::debug!("All {} workers finished", self.workers);
        Ok(())
    }
}

fn worker_loop(worker: usize, paths: Receiver<PathBuf>, outcomes: Sender<ManifestParseOutcome>) {
    let mut processed = 0usize;

    for path in paths.iter() {
        let outcome = process_path(&path);
        processed += 1;
        if outcomes.send(outcome).is_err() {
            log::debug!("Outcome receiver closed, worker {} stopping", worker);
            return;
        }
    }

    log::trace!("Worker {} processed {} manifests", worker, processed);
}

/// Read and extract a single manifest.
///
/// The ecosystem is chosen by exact basename match; anything else produces
/// an unsupported-file outcome.
pub fn process_path(path: &Path) -> ManifestParseOutcome {
    let ecosystem = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(Ecosystem::from_manifest_name);

    let Some(ecosystem) = ecosystem else {
        return ManifestParseOutcome::failed(
            path.to_path_buf(),
            None,
            ScanError::UnsupportedManifest {
                path: path.to_path_buf(),
            },
        );
    };

    let content = match fs::read(path).with_manifest_path(path) {
        Ok(content) => content,
        Err(error) => return ManifestParseOutcome::failed(path.to_path_buf(), Some(ecosystem), error),
    };

    match ecosystem.extract(&content) {
        Ok(dependencies) => ManifestParseOutcome::parsed(path.to_path_buf(), ecosystem, dependencies),
        Err(err) => ManifestParseOutcome::failed(path.to_path_buf(), Some(ecosystem), err.with_path(path)),
    }
}
