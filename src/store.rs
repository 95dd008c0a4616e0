use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{error, warn};
use rand::{distributions::Alphanumeric, Rng};

use crate::booking::{BookingRecord, NewBooking};
use crate::errors::StoreError;

/// Generates an opaque unique booking id
fn next_booking_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("booking_{}_{}", Utc::now().timestamp_millis(), suffix)
}

/// Durable collection of confirmed bookings, kept most-recent-first and
/// mirrored to a JSON file after every change.
///
/// Read failures degrade to an empty collection; write failures leave the
/// in-memory collection standing. Both are logged, neither is propagated
/// into the booking flow.
pub struct BookingStore {
    path: PathBuf,
    bookings: Vec<BookingRecord>,
}

impl BookingStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let bookings = match Self::load(&path) {
            Ok(bookings) => bookings,
            Err(err) => {
                warn!(
                    "could not read bookings from {}: {} (starting empty)",
                    path.display(),
                    err
                );
                Vec::new()
            }
        };
        Self { path, bookings }
    }

    fn load(path: &Path) -> Result<Vec<BookingRecord>, StoreError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.bookings)?)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(err) = self.save() {
            error!("failed to save bookings to {}: {}", self.path.display(), err);
        }
    }

    /// Stores a new booking, assigning its id and creation timestamp.
    /// Returns the stored record.
    pub fn add(&mut self, new_booking: NewBooking) -> BookingRecord {
        let record = BookingRecord {
            id: next_booking_id(),
            facility_id: new_booking.facility_id,
            facility_name: new_booking.facility_name,
            date_display: new_booking.date_display,
            date_iso: new_booking.date_iso,
            period: new_booking.period,
            slot_label: new_booking.slot_label,
            court: new_booking.court,
            player_count: new_booking.player_count,
            duration_hours: new_booking.duration_hours,
            price_per_hour: new_booking.price_per_hour,
            total_price: new_booking.total_price,
            price_per_player: new_booking.price_per_player,
            created_at: Utc::now().to_rfc3339(),
        };
        self.bookings.insert(0, record.clone());
        self.persist();
        record
    }

    /// Removes a booking by id. A no-op for ids that are not present.
    pub fn remove(&mut self, id: &str) {
        let before = self.bookings.len();
        self.bookings.retain(|booking| booking.id != id);
        if self.bookings.len() != before {
            self.persist();
        }
    }

    pub fn get(&self, id: &str) -> Option<&BookingRecord> {
        self.bookings.iter().find(|booking| booking.id == id)
    }

    /// All stored bookings, most recent first
    pub fn list(&self) -> &[BookingRecord] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Removes every stored booking
    pub fn clear(&mut self) {
        if !self.bookings.is_empty() {
            self.bookings.clear();
            self.persist();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::TimePeriod;
    use std::fs;

    fn sample_booking(court: &str) -> NewBooking {
        NewBooking {
            facility_id: "turf_1".to_string(),
            facility_name: "Greenfield Turf Arena".to_string(),
            date_display: "Mon, 24 Nov 2025".to_string(),
            date_iso: "2025-11-24".to_string(),
            period: TimePeriod::Noon,
            slot_label: "12:00 PM - 01:00 PM".to_string(),
            court: court.to_string(),
            player_count: 5,
            duration_hours: 3,
            price_per_hour: 1000,
            total_price: 3000,
            price_per_player: 600,
        }
    }

    #[test]
    fn add_assigns_id_and_timestamp_and_lists_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = BookingStore::open(dir.path().join("bookings.json"));

        let first = store.add(sample_booking("Court A"));
        let second = store.add(sample_booking("Court B"));

        assert!(!first.id.is_empty());
        assert!(!first.created_at.is_empty());
        assert_ne!(first.id, second.id);

        let listed: Vec<&str> = store.list().iter().map(|b| b.court.as_str()).collect();
        assert_eq!(listed, vec!["Court B", "Court A"]);

        // everything except id/createdAt round-trips from the input
        let stored = store.get(&first.id).unwrap();
        assert_eq!(stored.court, "Court A");
        assert_eq!(stored.total_price, 3000);
        assert_eq!(stored.slot_label, "12:00 PM - 01:00 PM");
    }

    #[test]
    fn bookings_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");

        let id = {
            let mut store = BookingStore::open(&path);
            store.add(sample_booking("Court A")).id
        };

        let reopened = BookingStore::open(&path);
        assert_eq!(reopened.len(), 1);
        assert!(reopened.get(&id).is_some());
    }

    #[test]
    fn remove_deletes_only_the_given_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = BookingStore::open(dir.path().join("bookings.json"));

        let keep = store.add(sample_booking("Court A"));
        let cancel = store.add(sample_booking("Court B"));

        store.remove(&cancel.id);
        assert_eq!(store.len(), 1);
        assert!(store.get(&cancel.id).is_none());
        assert!(store.get(&keep.id).is_some());
    }

    #[test]
    fn remove_of_unknown_id_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = BookingStore::open(dir.path().join("bookings.json"));
        store.add(sample_booking("Court A"));

        store.remove("booking_does_not_exist");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn corrupt_file_opens_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        fs::write(&path, "{ not json ").unwrap();

        let store = BookingStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn missing_file_opens_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookingStore::open(dir.path().join("nope/bookings.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        let mut store = BookingStore::open(&path);
        store.add(sample_booking("Court A"));
        store.add(sample_booking("Court B"));

        store.clear();
        assert!(store.is_empty());

        let reopened = BookingStore::open(&path);
        assert!(reopened.is_empty());
    }
}
