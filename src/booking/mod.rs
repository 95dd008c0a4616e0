pub mod builder;
pub mod export;
pub mod selection;
pub mod slots;
pub mod types;

pub use builder::{build_booking, can_confirm};
pub use export::export_bookings_to_csv;
pub use selection::SelectionState;
pub use slots::{generate_slots, period_config, slot_count};
pub use types::{BookingRecord, NewBooking, PeriodConfig, Slot, TimePeriod};
