use serde::{Deserialize, Serialize};

/// Named block of the day defining a sub-range of bookable hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimePeriod {
    Morning,
    Noon,
    Evening,
    Twilight,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Morning,
        TimePeriod::Noon,
        TimePeriod::Evening,
        TimePeriod::Twilight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TimePeriod::Morning => "Morning",
            TimePeriod::Noon => "Noon",
            TimePeriod::Evening => "Evening",
            TimePeriod::Twilight => "Twilight",
        }
    }

    /// Looks up a period by its display name (e.g. from a URL path)
    pub fn from_name(name: &str) -> Option<TimePeriod> {
        TimePeriod::ALL.iter().copied().find(|p| p.name() == name)
    }
}

/// Fixed configuration of a time period: which clock hours it spans
#[derive(Debug, Clone, Copy)]
pub struct PeriodConfig {
    pub label: &'static str,
    pub start_hour: u32,
    pub end_hour: u32,
    pub display_time: &'static str,
}

/// One bookable hour-long interval within a period, identified by its
/// 0-based position in the period's slot sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub index: usize,
    pub label: String,
}

/// A validated booking before the store assigns id and createdAt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub facility_id: String,
    pub facility_name: String,
    pub date_display: String,
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    pub period: TimePeriod,
    pub slot_label: String,
    pub court: String,
    pub player_count: u32,
    pub duration_hours: u32,
    pub price_per_hour: u32,
    pub total_price: u32,
    pub price_per_player: u32,
}

/// A confirmed booking as persisted. Never mutated once created; a
/// cancellation removes the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub facility_id: String,
    pub facility_name: String,
    pub date_display: String,
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    pub period: TimePeriod,
    pub slot_label: String,
    pub court: String,
    pub player_count: u32,
    pub duration_hours: u32,
    pub price_per_hour: u32,
    pub total_price: u32,
    pub price_per_player: u32,
    pub created_at: String,
}
