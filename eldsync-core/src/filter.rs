///! Duty-status filter
///!
///! Selects raw entries whose `Log.CurrentStatus` equals a requested
///! value. Operates on the raw batch rather than normalized records
///! because the status lives on a different nested path than the
///! driver/vehicle identity and is only needed for filtering/export.

use crate::types::RawEntry;

/// Return the entries whose duty status equals `status` exactly.
///
/// Matching is case-sensitive string equality; entries without a `Log`
/// sub-object or without a reported status never match. An empty result
/// is a success, never an error.
pub fn filter_by_status(entries: &[Option<RawEntry>], status: &str) -> Vec<RawEntry> {
    entries
        .iter()
        .flatten()
        .filter(|entry| entry.status() == Some(status))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(statuses: &[Option<&str>]) -> Vec<Option<RawEntry>> {
        statuses
            .iter()
            .map(|s| {
                let json = match s {
                    Some(status) => {
                        format!(r#"{{"Log": {{"CurrentStatus": "{}"}}}}"#, status)
                    }
                    None => r#"{"Driver": {"ID": 1}}"#.to_string(),
                };
                Some(serde_json::from_str(&json).unwrap())
            })
            .collect()
    }

    #[test]
    fn test_exact_match_preserves_order() {
        let entries = batch(&[Some("Driving"), Some("Off Duty"), Some("Driving")]);
        let matched = filter_by_status(&entries, "Driving");
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].status(), Some("Driving"));
        assert_eq!(matched[1].status(), Some("Driving"));
    }

    #[test]
    fn test_case_sensitive() {
        let entries = batch(&[Some("Driving")]);
        assert!(filter_by_status(&entries, "driving").is_empty());
        assert!(filter_by_status(&entries, "DRIVING").is_empty());
    }

    #[test]
    fn test_absent_status_value() {
        let entries = batch(&[Some("Driving"), Some("On Duty")]);
        assert!(filter_by_status(&entries, "SB").is_empty());
    }

    #[test]
    fn test_missing_log_never_matches() {
        let entries = batch(&[None, Some("SB")]);
        let matched = filter_by_status(&entries, "SB");
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_null_entries_skipped() {
        let mut entries = batch(&[Some("Driving")]);
        entries.insert(0, None);
        let matched = filter_by_status(&entries, "Driving");
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_empty_batch() {
        assert!(filter_by_status(&[], "Driving").is_empty());
    }
}
