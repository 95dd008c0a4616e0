use std::fs::File;
use std::io::Write;

use crate::booking::BookingRecord;
use crate::catalog::FacilityInfo;

/// Prints the facility header shown before the bookings list
pub fn print_facility_summary(facility: &FacilityInfo) {
    println!("=== {} ===", facility.name);
    println!("{}", facility.address);
    println!(
        "Rating: {} ({} ratings) | ₹{}/hour",
        facility.rating, facility.review_count, facility.price_per_hour
    );
    println!("Courts: {}", facility.courts.join(", "));
    println!("Sports: {}", facility.sports.join(", "));
}

/// Prints all stored bookings in a readable card-like format
pub fn print_bookings(records: &[BookingRecord]) {
    println!("\n=== My Bookings ({}) ===", records.len());

    if records.is_empty() {
        println!("No bookings yet.");
        return;
    }

    for booking in records {
        println!("\n{} [{}]", booking.facility_name, booking.id);
        println!("  {} | {}", booking.date_display, booking.slot_label);
        println!(
            "  {} | {} players | {} {}",
            booking.court,
            booking.player_count,
            booking.duration_hours,
            if booking.duration_hours == 1 { "hour" } else { "hours" }
        );
        println!(
            "  ₹{} total (₹{} per player)",
            booking.total_price, booking.price_per_player
        );
    }
}

/// Writes a plain-text bookings summary, one line per booking
pub fn write_bookings_to_file(
    records: &[BookingRecord],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;

    writeln!(file, "** Bookings ({}) **", records.len())?;
    for booking in records {
        writeln!(
            file,
            "{} | {} | {} | {} | {} players | ₹{}",
            booking.date_display,
            booking.slot_label,
            booking.facility_name,
            booking.court,
            booking.player_count,
            booking.total_price
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::TimePeriod;

    #[test]
    fn summary_file_has_one_line_per_booking() {
        let record = BookingRecord {
            id: "booking_7".to_string(),
            facility_id: "turf_1".to_string(),
            facility_name: "Greenfield Turf Arena".to_string(),
            date_display: "Tue, 25 Nov 2025".to_string(),
            date_iso: "2025-11-25".to_string(),
            period: TimePeriod::Morning,
            slot_label: "06:00 AM - 07:00 AM".to_string(),
            court: "Court C".to_string(),
            player_count: 10,
            duration_hours: 1,
            price_per_hour: 1000,
            total_price: 1000,
            price_per_player: 100,
            created_at: "2025-11-20T08:30:00+00:00".to_string(),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.txt");
        write_bookings_to_file(&[record], path.to_str().unwrap()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("** Bookings (1) **"));
        assert!(contents.contains("Tue, 25 Nov 2025 | 06:00 AM - 07:00 AM"));
    }
}
