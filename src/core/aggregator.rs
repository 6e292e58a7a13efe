//! Grouping of flat records by (name, category, packaging)

use crate::core::version::{compare, parse_lenient};
use crate::models::dependency::{AggregatedDependencyRecord, FlatDependencyRecord};
use semver::Version;
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Default)]
struct GroupState {
    count: usize,
    min: Option<Version>,
    max: Option<Version>,
}

impl GroupState {
    fn observe(&mut self, raw_version: &str) {
        self.count += 1;

        let Some(version) = parse_lenient(raw_version) else {
            return;
        };

        match &self.min {
            Some(min) if bound_order(&version, min) != Ordering::Less => {}
            _ => self.min = Some(version.clone()),
        }
        match &self.max {
            Some(max) if bound_order(&version, max) != Ordering::Greater => {}
            _ => self.max = Some(version),
        }
    }
}

/// Precedence first; build metadata only breaks ties, so the bounds do not
/// depend on the order records arrive in.
fn bound_order(a: &Version, b: &Version) -> Ordering {
    compare(a, b).then_with(|| a.cmp(b))
}

/// Aggregate flat records into one record per (name, category, packaging).
///
/// Every record counts towards its group. Only versions that parse as
/// semantic versions move the bounds; a group with none has empty bounds.
/// Output is sorted by name, category, then packaging.
pub fn aggregate(records: &[FlatDependencyRecord]) -> Vec<AggregatedDependencyRecord> {
    let mut groups: BTreeMap<(&str, &str, &str), GroupState> = BTreeMap::new();

    for record in records {
        groups
            .entry((
                record.name.as_str(),
                record.category.as_str(),
                record.packaging.as_str(),
            ))
            .or_default()
            .observe(&record.version);
    }

    groups
        .into_iter()
        .map(|((name, category, packaging), state)| AggregatedDependencyRecord {
            name: name.to_string(),
            min_version: state.min.map(|v| v.to_string()).unwrap_or_default(),
            max_version: state.max.map(|v| v.to_string()).unwrap_or_default(),
            count: state.count,
            category: category.to_string(),
            packaging: packaging.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, version: &str, category: &str, packaging: &str) -> FlatDependencyRecord {
        FlatDependencyRecord {
            name: name.to_string(),
            version: version.to_string(),
            category: category.to_string(),
            path: format!("/{}/{}", packaging, name),
            packaging: packaging.to_string(),
        }
    }

    #[test]
    fn test_counts_invalid_versions_but_ignores_them_for_bounds() {
        let records = vec![
            record("foo", "1.0.0", "prod", "node"),
            record("foo", "1.2.0", "prod", "node"),
            record("foo", "bad.version", "prod", "node"),
        ];

        assert_eq!(
            aggregate(&records),
            vec![AggregatedDependencyRecord {
                name: "foo".to_string(),
                min_version: "1.0.0".to_string(),
                max_version: "1.2.0".to_string(),
                count: 3,
                category: "prod".to_string(),
                packaging: "node".to_string(),
            }]
        );
    }

    #[test]
    fn test_group_without_valid_versions_has_empty_bounds() {
        let records = vec![
            record("django", ">=3.2", "prod", "python"),
            record("django", "", "prod", "python"),
        ];

        let groups = aggregate(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].min_version, "");
        assert_eq!(groups[0].max_version, "");
    }

    #[test]
    fn test_no_cross_category_or_ecosystem_merging() {
        let records = vec![
            record("lodash", "4.17.21", "prod", "node"),
            record("lodash", "4.17.20", "dev", "node"),
            record("lodash", "4.17.19", "prod", "dart"),
        ];

        let keys: Vec<_> = aggregate(&records)
            .into_iter()
            .map(|g| (g.category, g.packaging, g.count))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("dev".to_string(), "node".to_string(), 1),
                ("prod".to_string(), "dart".to_string(), 1),
                ("prod".to_string(), "node".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_prerelease_and_prefix_bounds() {
        let records = vec![
            record("x", "2.0.0", "prod", "go"),
            record("x", "v2.0.0-beta", "prod", "go"),
            record("x", "1.9", "prod", "go"),
        ];

        let groups = aggregate(&records);
        assert_eq!(groups[0].min_version, "1.9.0");
        assert_eq!(groups[0].max_version, "2.0.0");
    }

    #[test]
    fn test_partition_and_order_independence() {
        let mut records = vec![
            record("b", "1.0.0", "prod", "node"),
            record("a", "0.1.0", "dev", "node"),
            record("b", "3.0.0", "prod", "node"),
            record("a", "junk", "dev", "node"),
            record("c", "2.0.0", "prod", "python"),
            record("b", "2.0.0", "prod", "node"),
        ];

        let forward = aggregate(&records);
        let total: usize = forward.iter().map(|g| g.count).sum();
        assert_eq!(total, records.len());

        records.reverse();
        assert_eq!(aggregate(&records), forward);
        records.rotate_left(2);
        assert_eq!(aggregate(&records), forward);

        for group in &forward {
            if let (Some(min), Some(max)) = (
                parse_lenient(&group.min_version),
                parse_lenient(&group.max_version),
            ) {
                assert_ne!(compare(&min, &max), Ordering::Greater);
            }
        }
    }

    #[test]
    fn test_build_metadata_ties_are_order_independent() {
        let mut records = vec![
            record("grpc", "1.0.0+b", "prod", "go"),
            record("grpc", "1.0.0+a", "prod", "go"),
            record("grpc", "1.0.0+c", "prod", "go"),
        ];

        let forward = aggregate(&records);
        assert_eq!(forward[0].min_version, "1.0.0+a");
        assert_eq!(forward[0].max_version, "1.0.0+c");

        records.reverse();
        assert_eq!(aggregate(&records), forward);
        records.rotate_left(1);
        assert_eq!(aggregate(&records), forward);
    }

    #[test]
    fn test_output_is_sorted() {
        let records = vec![
            record("zeta", "1.0.0", "prod", "node"),
            record("alpha", "1.0.0", "prod", "node"),
            record("mid", "1.0.0", "dev", "node"),
        ];

        let names: Vec<_> = aggregate(&records).into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }
}
