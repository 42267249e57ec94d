///! Vehicle assignment conflict detection
///!
///! Groups driver records by vehicle id and flags every driver whose
///! vehicle is shared with at least one other driver in the same
///! snapshot.

use std::collections::HashMap;

use crate::types::DriverRecord;

/// Detect assignment conflicts in one snapshot.
///
/// Two passes: first build a vehicle-id → occupancy map, then emit a
/// stamped copy of every record whose vehicle is shared by more than one
/// driver. Input order is preserved and the input itself is not mutated.
/// Records without a vehicle assignment contribute to no count and can
/// never be flagged.
pub fn detect_conflicts(records: &[DriverRecord]) -> Vec<DriverRecord> {
    let mut occupancy: HashMap<&str, u32> = HashMap::new();
    for record in records {
        if let Some(vehicle) = assigned_vehicle(record) {
            *occupancy.entry(vehicle).or_insert(0) += 1;
        }
    }

    records
        .iter()
        .filter_map(|record| {
            let vehicle = assigned_vehicle(record)?;
            let count = occupancy[vehicle];
            if count > 1 {
                Some(DriverRecord {
                    vehicle_occupancy: Some(count),
                    ..record.clone()
                })
            } else {
                None
            }
        })
        .collect()
}

fn assigned_vehicle(record: &DriverRecord) -> Option<&str> {
    record.vehicle_id.as_deref().filter(|id| !id.is_empty())
}
