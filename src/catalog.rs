use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

/// Built-in copy of the facility data, used when the data file is absent
const DEFAULT_FACILITY_JSON: &str = include_str!("../data/facility.json");

/// Read-only descriptive data for the facility being booked
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityInfo {
    pub id: String,
    pub name: String,
    pub address: String,
    pub rating: f32,
    pub review_count: u32,
    pub price_per_hour: u32,
    pub courts: Vec<String>,
    pub facilities: Vec<String>,
    pub sports: Vec<String>,
}

/// Loads the facility descriptor from a JSON file, falling back to the
/// compiled-in data when the file is missing or unreadable
pub fn load_facility<P: AsRef<Path>>(path: P) -> FacilityInfo {
    let path = path.as_ref();
    let from_file = fs::read_to_string(path)
        .ok()
        .and_then(|contents| serde_json::from_str(&contents).ok());

    match from_file {
        Some(facility) => facility,
        None => {
            warn!(
                "facility data not readable at {}, using built-in data",
                path.display()
            );
            builtin_facility()
        }
    }
}

fn builtin_facility() -> FacilityInfo {
    serde_json::from_str(DEFAULT_FACILITY_JSON).expect("built-in facility data is valid JSON")
}
