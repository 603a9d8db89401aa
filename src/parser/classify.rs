use anyhow::{bail, Result};

use crate::parser::records::RawUpdate;

/// Known release-type labels and whether the update is cumulative.
const UPDATE_TYPES: &[(&str, bool)] = &[
    ("", false), // legacy discontinued non-cumulative updates
    ("security-only update", false),
    ("monthly rollup", true),
    ("os build monthly rollup", true), // shadowed by the "os build" collapse below
    ("preview of monthly rollup", true),
];

/// Map a record's release-type label to its cumulative flag.
///
/// Labels are matched lowercased and trimmed. The >= 10.0 pages renamed the
/// rollups to "OS Build ..." variants; all of those are cumulative, so any
/// label containing "os build" collapses to "monthly rollup" instead of
/// enumerating every variant. Anything not in the table is fatal.
pub fn is_cumulative(record: &RawUpdate) -> Result<bool> {
    let mut label = record.release_version.to_lowercase().trim().to_string();
    if label.contains("os build") {
        label = "monthly rollup".to_string();
    }
    match UPDATE_TYPES.iter().find(|(known, _)| *known == label) {
        Some((_, cumulative)) => Ok(*cumulative),
        None => bail!(
            "Update with unknown releaseVersion {:?}\n{:?}",
            record.release_version,
            record
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(release_version: &str) -> RawUpdate {
        RawUpdate {
            release_version: release_version.to_string(),
            id: "4338815".to_string(),
            release_date: "2018-07-10T10:00:00".to_string(),
        }
    }

    #[test]
    fn fixed_table() {
        assert!(!is_cumulative(&record("")).unwrap());
        assert!(!is_cumulative(&record("Security Only Update")).unwrap());
        assert!(is_cumulative(&record("Monthly Rollup")).unwrap());
        assert!(is_cumulative(&record("Preview of Monthly Rollup")).unwrap());
    }

    #[test]
    fn trims_and_lowercases() {
        assert!(is_cumulative(&record("  MONTHLY ROLLUP  ")).unwrap());
    }

    #[test]
    fn os_build_labels_are_cumulative() {
        assert!(is_cumulative(&record("OS Build 17763.55")).unwrap());
        assert!(is_cumulative(&record("os build monthly rollup")).unwrap());
        assert!(is_cumulative(&record("  Os BuIlD 14393.0  ")).unwrap());
    }

    #[test]
    fn unknown_label_is_fatal() {
        let err = is_cumulative(&record("Feature Update")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Feature Update"));
        assert!(msg.contains("4338815"));
    }
}
