use std::path::Path;

use csv::WriterBuilder;

use super::types::BookingRecord;

/// Exports stored bookings to a CSV file, one row per booking with a
/// header row
pub fn export_bookings_to_csv(
    records: &[BookingRecord],
    csv_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = WriterBuilder::new().from_path(csv_path)?;

    wtr.write_record([
        "id",
        "facility",
        "date",
        "period",
        "slot",
        "court",
        "players",
        "hours",
        "price_per_hour",
        "total_price",
        "price_per_player",
        "created_at",
    ])?;

    for booking in records {
        wtr.write_record([
            booking.id.clone(),
            booking.facility_name.clone(),
            booking.date_iso.clone(),
            booking.period.name().to_string(),
            booking.slot_label.clone(),
            booking.court.clone(),
            booking.player_count.to_string(),
            booking.duration_hours.to_string(),
            booking.price_per_hour.to_string(),
            booking.total_price.to_string(),
            booking.price_per_player.to_string(),
            booking.created_at.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
