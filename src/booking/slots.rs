use super::types::{PeriodConfig, Slot, TimePeriod};

/// Returns the fixed configuration for a time period
pub fn period_config(period: TimePeriod) -> &'static PeriodConfig {
    match period {
        TimePeriod::Morning => &PeriodConfig {
            label: "Morning",
            start_hour: 6,
            end_hour: 12,
            display_time: "06:00 AM - 12:00 PM",
        },
        TimePeriod::Noon => &PeriodConfig {
            label: "Noon",
            start_hour: 12,
            end_hour: 16,
            display_time: "12:00 PM - 04:00 PM",
        },
        TimePeriod::Evening => &PeriodConfig {
            label: "Evening",
            start_hour: 16,
            end_hour: 20,
            display_time: "04:00 PM - 08:00 PM",
        },
        TimePeriod::Twilight => &PeriodConfig {
            label: "Twilight",
            start_hour: 20,
            end_hour: 23,
            display_time: "08:00 PM - 11:00 PM",
        },
    }
}

/// Formats a 24h clock hour as "HH:00 AM/PM" (hour 0 shown as 12)
fn hour_label(hour: u32) -> String {
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{:02}:00 {}", display_hour, meridiem)
}

/// Generates the ordered hourly slots for a period. Slot `i` covers the
/// clock hour `start_hour + i`. Pure and deterministic; slots are rebuilt
/// from the period config every time, never stored.
pub fn generate_slots(period: TimePeriod) -> Vec<Slot> {
    let config = period_config(period);

    (config.start_hour..config.end_hour)
        .enumerate()
        .map(|(index, hour)| Slot {
            index,
            label: format!("{} - {}", hour_label(hour), hour_label(hour + 1)),
        })
        .collect()
}

/// Number of bookable slots in a period
pub fn slot_count(period: TimePeriod) -> usize {
    let config = period_config(period);
    (config.end_hour - config.start_hour) as usize
}
