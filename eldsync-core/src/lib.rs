///! ELD driver/vehicle telemetry synchronization engine
///!
///! Fetches the full driver telemetry dataset from an ELD API,
///! normalizes the loosely-structured payload into canonical driver
///! records, and derives filtered / conflict views over one snapshot.

pub mod client;
pub mod config;
pub mod conflicts;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod types;

pub use client::{BlockingEldClient, EldClient};
pub use config::EldConfig;
pub use conflicts::detect_conflicts;
pub use error::FetchError;
pub use filter::filter_by_status;
pub use normalize::{normalize_batch, normalize_entry};
pub use types::{DriverRecord, EldBatch, RawEntry};
