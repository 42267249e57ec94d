///! ELD telemetry data types
///!
///! Raw wire types mirror the upstream JSON shape (`Data` array with
///! optional nested `Driver` / `Vehicle` / `Log` objects); `DriverRecord`
///! is the canonical normalized form the conflict detector works on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Driver id as sent by the API – some tenants send integers, others strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Num(i64),
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Num(n) => write!(f, "{}", n),
            RawId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Nested `Driver` object from the raw feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDriver {
    #[serde(rename = "ID", default)]
    pub id: Option<RawId>,
    #[serde(rename = "FirstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "PhoneNo", default)]
    pub phone_no: Option<String>,
}

/// Nested `Vehicle` object from the raw feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawVehicle {
    #[serde(rename = "DisplayID", default)]
    pub display_id: Option<String>,
}

/// Nested `Log` object from the raw feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLog {
    #[serde(rename = "CurrentStatus", default)]
    pub current_status: Option<String>,
}

/// One element of the upstream `Data` array.
///
/// Every sub-object may be absent or JSON `null`; both deserialize to
/// `None`, so partial entries never fail the batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(rename = "Driver", default)]
    pub driver: Option<RawDriver>,
    #[serde(rename = "Vehicle", default)]
    pub vehicle: Option<RawVehicle>,
    #[serde(rename = "Log", default)]
    pub log: Option<RawLog>,
}

impl RawEntry {
    /// An entry with no sub-objects at all carries no information and is
    /// skipped by normalization, same as a `null` array element.
    pub fn is_empty(&self) -> bool {
        self.driver.is_none() && self.vehicle.is_none() && self.log.is_none()
    }

    /// Duty status from the nested `Log` object, if reported.
    pub fn status(&self) -> Option<&str> {
        self.log.as_ref().and_then(|l| l.current_status.as_deref())
    }
}

/// A full snapshot of the driver telemetry feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EldBatch {
    /// When this snapshot was fetched
    pub fetched_at: DateTime<Utc>,
    /// Raw `Data` entries; `None` elements were JSON `null` in the feed
    pub entries: Vec<Option<RawEntry>>,
}

/// Canonical driver/vehicle pairing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRecord {
    /// Opaque driver id; empty if the feed omitted it
    pub driver_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    /// Assigned vehicle; `None` means unassigned (absent or empty upstream)
    pub vehicle_id: Option<String>,
    /// Count of records sharing `vehicle_id` in the same snapshot;
    /// `None` until conflict detection has run
    pub vehicle_occupancy: Option<u32>,
}
