use chrono::NaiveDate;

use crate::catalog::FacilityInfo;
use crate::dates::{format_date_display, is_past};
use crate::errors::ValidationError;

use super::selection::{SelectionState, MAX_PLAYERS, MIN_PLAYERS};
use super::slots::generate_slots;
use super::types::NewBooking;

/// Mirrors the confirm button's enabled state: a date, an anchored slot and
/// a court are chosen, and at least one player is coming.
pub fn can_confirm(selection: &SelectionState) -> bool {
    selection.date().is_some()
        && selection.start_slot_index().is_some()
        && selection.court().is_some()
        && selection.player_count() >= MIN_PLAYERS
}

/// Integer round-half-up division, matching how the per-player price is
/// rounded on screen
fn round_half_up(numerator: u32, denominator: u32) -> u32 {
    (2 * numerator + denominator) / (2 * denominator)
}

/// Validates the selection and assembles the booking to hand to the store.
/// Checks run in a fixed order and the first unmet precondition is
/// returned; nothing is partially constructed on failure.
pub fn build_booking(
    selection: &SelectionState,
    facility: &FacilityInfo,
    today: NaiveDate,
) -> Result<NewBooking, ValidationError> {
    let date = selection.date().ok_or(ValidationError::NoDate)?;
    if is_past(date, today) {
        return Err(ValidationError::DateInPast(date));
    }

    let start_index = selection
        .start_slot_index()
        .ok_or(ValidationError::NoSlot)?;
    let slots = generate_slots(selection.period());
    if start_index + selection.duration() as usize > slots.len() {
        return Err(ValidationError::SlotOutOfRange);
    }

    let court = selection.court().ok_or(ValidationError::NoCourt)?;
    if !facility.courts.iter().any(|c| c == court) {
        return Err(ValidationError::UnknownCourt(court.to_string()));
    }

    let player_count = selection.player_count();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(ValidationError::InvalidPlayerCount(player_count));
    }

    let duration_hours = selection.duration();
    let total_price = facility.price_per_hour * duration_hours;

    Ok(NewBooking {
        facility_id: facility.id.clone(),
        facility_name: facility.name.clone(),
        date_display: format_date_display(date),
        date_iso: date.format("%Y-%m-%d").to_string(),
        period: selection.period(),
        slot_label: slots[start_index].label.clone(),
        court: court.to_string(),
        player_count,
        duration_hours,
        price_per_hour: facility.price_per_hour,
        total_price,
        price_per_player: round_half_up(total_price, player_count),
    })
}
