use async_trait::async_trait;

use crate::seat::{AvailabilityReport, SeatId, SeatRecord};
use crate::ticket::{IssueTicketRequest, Ticket};

/// Inventory-side failures
#[derive(Debug, Clone, thiserror::Error)]
pub enum InventoryError {
    #[error("seats already taken: {seat_ids:?}")]
    Conflict { seat_ids: Vec<SeatId> },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("inventory request failed: {0}")]
    Transport(String),
}

/// Issuance-side failures
#[derive(Debug, Clone, thiserror::Error)]
pub enum IssuanceError {
    #[error("ticket rejected: {0}")]
    Rejected(String),

    #[error("issuance request failed: {0}")]
    Transport(String),
}

/// Authoritative seat inventory, owned by the remote box-office service.
/// The client never assumes ownership of seat state beyond the advisory
/// hold window.
#[async_trait]
pub trait SeatInventory: Send + Sync {
    /// Full seat grid for a show, with each seat's current remote state
    async fn seat_map(&self, show_id: i64) -> Result<Vec<SeatRecord>, InventoryError>;

    /// Re-check the given seats against remote truth
    async fn check_availability(
        &self,
        seat_ids: &[SeatId],
    ) -> Result<AvailabilityReport, InventoryError>;

    /// Place a time-bounded hold on the whole set. A lost race is
    /// reported as [`InventoryError::Conflict`].
    async fn reserve_seats(&self, show_id: i64, seat_ids: &[SeatId])
        -> Result<(), InventoryError>;

    /// Release held seats. Idempotent by contract: releasing seats that
    /// are already available succeeds.
    async fn release_seats(&self, show_id: i64, seat_ids: &[SeatId])
        -> Result<(), InventoryError>;
}

/// Turns a paid reservation into persisted tickets, one call per seat
#[async_trait]
pub trait TicketIssuance: Send + Sync {
    async fn issue_ticket(&self, request: &IssueTicketRequest) -> Result<Ticket, IssuanceError>;
}
