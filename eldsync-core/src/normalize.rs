///! Raw entry normalization
///!
///! Maps the loosely-structured feed entries into canonical
///! [`DriverRecord`]s. Missing or null sub-objects behave as empty
///! objects and missing fields become empty strings, so partial data
///! never aborts a batch.

use crate::types::{DriverRecord, RawEntry};

/// Normalize one raw entry.
///
/// Returns `None` for an entry with no sub-objects at all; that is the
/// only case where an entry contributes nothing to the output.
pub fn normalize_entry(entry: &RawEntry) -> Option<DriverRecord> {
    if entry.is_empty() {
        return None;
    }

    let driver = entry.driver.clone().unwrap_or_default();
    let vehicle = entry.vehicle.clone().unwrap_or_default();

    // An empty-string DisplayID means the same as no vehicle at all.
    let vehicle_id = vehicle.display_id.filter(|id| !id.is_empty());

    Some(DriverRecord {
        driver_id: driver.id.map(|id| id.to_string()).unwrap_or_default(),
        first_name: driver.first_name.unwrap_or_default(),
        last_name: driver.last_name.unwrap_or_default(),
        phone_number: driver.phone_no.unwrap_or_default(),
        vehicle_id,
        vehicle_occupancy: None,
    })
}

/// Normalize a raw batch, dropping `null` and empty entries.
pub fn normalize_batch(entries: &[Option<RawEntry>]) -> Vec<DriverRecord> {
    entries.iter().flatten().filter_map(normalize_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawDriver, RawId, RawVehicle};

    fn entry(json: &str) -> RawEntry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_full_entry() {
        let record = normalize_entry(&entry(
            r#"{"Driver": {"ID": 42, "FirstName": "Ana", "LastName": "Torres", "PhoneNo": "555-0101"},
                "Vehicle": {"DisplayID": "T1"},
                "Log": {"CurrentStatus": "Driving"}}"#,
        ))
        .unwrap();

        assert_eq!(record.driver_id, "42");
        assert_eq!(record.first_name, "Ana");
        assert_eq!(record.last_name, "Torres");
        assert_eq!(record.phone_number, "555-0101");
        assert_eq!(record.vehicle_id.as_deref(), Some("T1"));
        assert_eq!(record.vehicle_occupancy, None);
    }

    #[test]
    fn test_string_driver_id() {
        let record = normalize_entry(&entry(
            r#"{"Driver": {"ID": "drv-9"}, "Vehicle": {"DisplayID": "T2"}}"#,
        ))
        .unwrap();
        assert_eq!(record.driver_id, "drv-9");
    }

    #[test]
    fn test_missing_sub_objects_yield_empty_fields() {
        let record = normalize_entry(&entry(r#"{"Log": {"CurrentStatus": "SB"}}"#)).unwrap();
        assert_eq!(record.driver_id, "");
        assert_eq!(record.first_name, "");
        assert_eq!(record.last_name, "");
        assert_eq!(record.phone_number, "");
        assert_eq!(record.vehicle_id, None);
    }

    #[test]
    fn test_missing_driver_fields_yield_empty_strings() {
        let record = normalize_entry(&entry(
            r#"{"Driver": {"ID": 1}, "Vehicle": {}}"#,
        ))
        .unwrap();
        assert_eq!(record.driver_id, "1");
        assert_eq!(record.first_name, "");
        assert_eq!(record.phone_number, "");
        assert_eq!(record.vehicle_id, None);
    }

    #[test]
    fn test_empty_display_id_is_unassigned() {
        let record = normalize_entry(&RawEntry {
            driver: Some(RawDriver {
                id: Some(RawId::Num(3)),
                ..Default::default()
            }),
            vehicle: Some(RawVehicle {
                display_id: Some(String::new()),
            }),
            log: None,
        })
        .unwrap();
        assert_eq!(record.vehicle_id, None);
    }

    #[test]
    fn test_empty_entry_skipped() {
        assert!(normalize_entry(&RawEntry::default()).is_none());
    }

    #[test]
    fn test_batch_drops_null_entries() {
        let entries = vec![
            None,
            Some(entry(r#"{"Driver": {"ID": 1, "FirstName": "A"}}"#)),
            Some(RawEntry::default()),
            // All-null sub-objects fold into the same empty shape as {}
            // and are skipped the same way.
            Some(entry(r#"{"Driver": null, "Vehicle": null, "Log": null}"#)),
            Some(entry(r#"{"Driver": {"ID": 2, "FirstName": "B"}}"#)),
        ];

        let records = normalize_batch(&entries);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].first_name, "A");
        assert_eq!(records[1].first_name, "B");
    }

    #[test]
    fn test_batch_keeps_duplicate_driver_ids() {
        let entries = vec![
            Some(entry(r#"{"Driver": {"ID": 1}}"#)),
            Some(entry(r#"{"Driver": {"ID": 1}}"#)),
        ];
        // Duplicates in the feed are preserved as separate records.
        assert_eq!(normalize_batch(&entries).len(), 2);
    }

    #[test]
    fn test_status_stays_on_raw_entry() {
        let e = entry(r#"{"Driver": {"ID": 5}, "Log": {"CurrentStatus": "Off Duty"}}"#);
        // The duty status lives on the raw entry, not the record.
        assert_eq!(e.status(), Some("Off Duty"));
        assert!(normalize_entry(&e).is_some());
    }
}
