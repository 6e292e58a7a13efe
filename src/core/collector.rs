//! Outcome collection
//!
//! Drains the outcome channel to closure, logs and discards failed manifests
//! and flattens the rest into one record per declared dependency.

use crate::models::dependency::{FlatDependencyRecord, ManifestParseOutcome};
use crate::models::results::ScanResults;
use crossbeam::channel::Receiver;

/// Called after each outcome with the number of manifests seen so far
pub type ProgressFn<'a> = dyn Fn(usize) + Send + Sync + 'a;

/// Turn a successful outcome into flat records; failed outcomes yield none
pub fn denormalise(outcome: &ManifestParseOutcome) -> Vec<FlatDependencyRecord> {
    let (Some(ecosystem), Ok(dependencies)) = (outcome.ecosystem, &outcome.result) else {
        return Vec::new();
    };

    let path = outcome.path.to_string_lossy();
    dependencies
        .iter()
        .map(|dep| FlatDependencyRecord::from_declared(dep, &path, ecosystem))
        .collect()
}

/// Consume every outcome until the channel closes and return the sorted
/// results. Nothing is returned before the channel is fully drained.
pub fn collect(outcomes: Receiver<ManifestParseOutcome>, progress: Option<&ProgressFn<'_>>) -> ScanResults {
    let mut results = ScanResults::new();

    for outcome in outcomes.iter() {
        match &outcome.result {
            Ok(_) => {
                let records = denormalise(&outcome);
                log::debug!("{}: {} dependencies", outcome.path.display(), records.len());
                results.add_manifest(records);
            }
            Err(err) => {
                log::warn!("Error parsing {}: {}", outcome.path.display(), err);
                results.add_error(outcome.path.clone(), err);
            }
        }

        if let Some(progress) = progress {
            progress(results.summary.manifests_seen());
        }
    }

    results.sort_dependencies();
    results
}
