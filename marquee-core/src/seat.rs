use serde::{Deserialize, Serialize};

/// Server-assigned seat identifier. The box-office API keys every entity
/// by integer id.
pub type SeatId = i64;

/// Seat state as reported by the inventory service, which is the sole
/// owner of this field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemoteSeatState {
    Available,
    /// Temporarily claimed by an operator hold, released on timeout
    Held,
    /// Sold; terminal for the show
    Occupied,
    /// Blocked for sale by room configuration
    Disabled,
}

/// One seat in a show's map as reported by the inventory service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatRecord {
    pub id: SeatId,
    pub row: String,
    pub number: i32,
    pub state: RemoteSeatState,
}

impl SeatRecord {
    pub fn label(&self) -> String {
        format!("{}{}", self.row, self.number)
    }
}

/// A seat the availability check reported as taken, with enough context
/// for the operator-facing message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnavailableSeat {
    pub id: SeatId,
    pub row: String,
    pub number: i32,
    pub state: RemoteSeatState,
}

impl UnavailableSeat {
    pub fn label(&self) -> String {
        format!("{}{}", self.row, self.number)
    }
}

/// Result of a bulk availability check against the inventory service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityReport {
    pub all_available: bool,
    pub unavailable: Vec<UnavailableSeat>,
}

impl AvailabilityReport {
    pub fn clear() -> Self {
        Self {
            all_available: true,
            unavailable: Vec::new(),
        }
    }

    pub fn with_conflicts(unavailable: Vec<UnavailableSeat>) -> Self {
        Self {
            all_available: unavailable.is_empty(),
            unavailable,
        }
    }
}
