//! Scan result structures

use crate::error::{ErrorSeverity, ScanError};
use crate::models::dependency::FlatDependencyRecord;
use std::cmp::Ordering;
use std::path::PathBuf;
use std::time::Duration;

/// Everything the collector gathered from one run
#[derive(Debug, Clone, Default)]
pub struct ScanResults {
    pub dependencies: Vec<FlatDependencyRecord>,
    pub errors: Vec<ScanFailure>,
    pub summary: ScanSummary,
}

impl ScanResults {
    /// Create a new empty ScanResults instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the dependencies of one successfully parsed manifest
    pub fn add_manifest(&mut self, records: Vec<FlatDependencyRecord>) {
        self.summary.manifests_parsed += 1;
        self.summary.dependencies_found += records.len();
        self.dependencies.extend(records);
    }

    /// Record a manifest that could not be read or parsed
    pub fn add_error(&mut self, path: PathBuf, error: &ScanError) {
        self.summary.manifests_failed += 1;
        self.errors.push(ScanFailure {
            path,
            error: error.user_message(),
            severity: error.severity(),
        });
    }

    /// Set the scan duration in the summary
    pub fn set_scan_duration(&mut self, duration: Duration) {
        self.summary.scan_duration = duration;
    }

    /// Sort flat records by packaging, category, name, then path
    pub fn sort_dependencies(&mut self) {
        self.dependencies.sort_by(compare_flat_records);
    }
}

/// Ordering used for flat output
pub fn compare_flat_records(a: &FlatDependencyRecord, b: &FlatDependencyRecord) -> Ordering {
    a.packaging
        .cmp(&b.packaging)
        .then_with(|| a.category.cmp(&b.category))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.path.cmp(&b.path))
}

/// A manifest that was discarded, with the reason
#[derive(Debug, Clone)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub error: String,
    pub severity: ErrorSeverity,
}

/// Counters reported after a scan
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSummary {
    pub manifests_parsed: usize,
    pub manifests_failed: usize,
    pub dependencies_found: usize,
    pub scan_duration: Duration,
}

impl ScanSummary {
    /// Total manifests that reached the collector
    pub fn manifests_seen(&self) -> usize {
        self.manifests_parsed + self.manifests_failed
    }

    /// Format the scan duration for display
    pub fn format_duration(&self) -> String {
        let millis = self.scan_duration.as_millis();
        if millis < 1000 {
            format!("{}ms", millis)
        } else {
            format!("{:.2}s", self.scan_duration.as_secs_f64())
        }
    }
}
