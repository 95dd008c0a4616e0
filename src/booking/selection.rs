use chrono::NaiveDate;

use super::slots::slot_count;
use super::types::TimePeriod;

pub const MIN_PLAYERS: u32 = 1;
pub const MAX_PLAYERS: u32 = 20;

/// One booking-in-progress, owned exclusively by the active session and
/// mutated only by discrete user events. The slot selection is an
/// anchor-plus-duration model: the first tap anchors a start slot, later
/// taps extend, shrink, reset, or re-anchor it.
#[derive(Debug, Clone)]
pub struct SelectionState {
    period: TimePeriod,
    date: Option<NaiveDate>,
    start_slot_index: Option<usize>,
    duration: u32,
    court: Option<String>,
    player_count: u32,
}

impl SelectionState {
    pub fn new(period: TimePeriod) -> Self {
        Self {
            period,
            date: None,
            start_slot_index: None,
            duration: 1,
            court: None,
            player_count: 5,
        }
    }

    pub fn period(&self) -> TimePeriod {
        self.period
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn start_slot_index(&self) -> Option<usize> {
        self.start_slot_index
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Index of the last slot included in the selection, if anchored
    pub fn end_slot_index(&self) -> Option<usize> {
        self.start_slot_index
            .map(|start| start + self.duration as usize - 1)
    }

    pub fn court(&self) -> Option<&str> {
        self.court.as_deref()
    }

    pub fn player_count(&self) -> u32 {
        self.player_count
    }

    /// Applies one tap on the slot at `tapped`:
    /// - no anchor yet: anchor there with duration 1
    /// - tap on the anchor: collapse back to one hour
    /// - tap after the anchor: duration runs through the tapped slot
    /// - tap before the anchor: re-anchor there with duration 1
    ///
    /// A tap outside the period's slot range is ignored.
    pub fn tap_slot(&mut self, tapped: usize) {
        if tapped >= slot_count(self.period) {
            return;
        }

        match self.start_slot_index {
            None => {
                self.start_slot_index = Some(tapped);
                self.duration = 1;
            }
            Some(start) if tapped == start => {
                self.duration = 1;
            }
            Some(start) if tapped > start => {
                self.duration = (tapped - start + 1) as u32;
            }
            Some(_) => {
                self.start_slot_index = Some(tapped);
                self.duration = 1;
            }
        }
    }

    /// Switches the active period. Always discards the slot selection:
    /// slot indices are period-relative, so an anchor from another period's
    /// grid is meaningless here.
    pub fn change_period(&mut self, period: TimePeriod) {
        self.period = period;
        self.start_slot_index = None;
        self.duration = 1;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    pub fn select_court(&mut self, court: String) {
        self.court = Some(court);
    }

    /// Increment/decrement the player count, clamped to [MIN_PLAYERS, MAX_PLAYERS]
    pub fn adjust_players(&mut self, delta: i32) {
        let adjusted = self.player_count as i32 + delta;
        self.player_count = adjusted.clamp(MIN_PLAYERS as i32, MAX_PLAYERS as i32) as u32;
    }

    /// Sets the player count directly, bypassing the clamp. The validator
    /// re-checks the bound at confirm time.
    pub fn set_player_count(&mut self, count: u32) {
        self.player_count = count;
    }
}
