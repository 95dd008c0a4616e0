use chrono::NaiveDate;
use thiserror::Error;

/// A booking confirmation was attempted with an incomplete or invalid
/// selection. Carries the first unmet precondition in check order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no date selected")]
    NoDate,

    #[error("selected date {0} is in the past")]
    DateInPast(NaiveDate),

    #[error("no time slot selected")]
    NoSlot,

    #[error("selected slot range exceeds the period's available slots")]
    SlotOutOfRange,

    #[error("no court selected")]
    NoCourt,

    #[error("court '{0}' is not offered at this facility")]
    UnknownCourt(String),

    #[error("player count {0} must be between 1 and 20")]
    InvalidPlayerCount(u32),
}

/// Failure while reading or writing the persisted bookings file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access bookings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("bookings file contents are not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}
