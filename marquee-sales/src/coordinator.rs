use std::sync::Arc;

use marquee_core::inventory::{InventoryError, IssuanceError, SeatInventory, TicketIssuance};
use marquee_core::seat::{SeatId, UnavailableSeat};
use marquee_core::ticket::{IssueTicketRequest, Ticket};
use tracing::{debug, warn};

use crate::payment::CashPayment;
use crate::seatmap::SeatMap;

/// Why a sale could not move forward. Everything except
/// `PartialSaleFailure` leaves the session in a state the operator can
/// retry from.
#[derive(Debug, thiserror::Error)]
pub enum SaleError {
    #[error("no seats selected")]
    EmptySelection,

    #[error("no reserved seats to sell")]
    NothingReserved,

    #[error("another submission is still in flight")]
    OperationInFlight,

    #[error("{} seat(s) are no longer available", .0.len())]
    SeatsUnavailable(Vec<UnavailableSeat>),

    #[error("reservation failed after the compensating retry")]
    ReservationFailed,

    #[error("payment of {tendered_cents} does not cover total {total_cents}")]
    InsufficientPayment {
        tendered_cents: i64,
        total_cents: i64,
    },

    /// Issuance is the point of no return: tickets already issued are
    /// not rolled back, and the operator reconciles the failed seats
    /// manually.
    #[error("sale completed partially: {} issued, {} failed", issued.len(), failed.len())]
    PartialSaleFailure {
        issued: Vec<Ticket>,
        failed: Vec<SeatId>,
    },

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Issuance(#[from] IssuanceError),
}

/// One operator's sale-in-progress for one show
#[derive(Debug, Clone)]
pub struct SaleContext {
    pub show_id: i64,
    pub operator_id: i64,
    pub unit_price_cents: i64,
}

/// A server-side hold on a set of seats. Advisory from the client's
/// view: the inventory service is the sole arbiter of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationHold {
    pub show_id: i64,
    pub seat_ids: Vec<SeatId>,
}

/// Outcome of a fully successful sale
#[derive(Debug)]
pub struct CompletedSale {
    pub tickets: Vec<Ticket>,
    pub total_cents: i64,
    pub change_cents: i64,
}

/// Drives a seat set from user intent to either an issued sale or a
/// fully released, consistent state. Collaborators are injected so the
/// whole lifecycle runs against fakes in tests.
pub struct ReservationCoordinator {
    inventory: Arc<dyn SeatInventory>,
    issuance: Arc<dyn TicketIssuance>,
    context: SaleContext,
    map: SeatMap,
    submitting: bool,
}

impl ReservationCoordinator {
    pub fn new(
        inventory: Arc<dyn SeatInventory>,
        issuance: Arc<dyn TicketIssuance>,
        context: SaleContext,
    ) -> Self {
        Self {
            inventory,
            issuance,
            context,
            map: SeatMap::default(),
            submitting: false,
        }
    }

    /// Fetch the seat map for the session's show, resetting local state
    pub async fn load_map(&mut self) -> Result<(), InventoryError> {
        let records = self.inventory.seat_map(self.context.show_id).await?;
        debug!(
            show_id = self.context.show_id,
            seats = records.len(),
            "seat map loaded"
        );
        self.map = SeatMap::from_records(records);
        Ok(())
    }

    /// Read-only seat-state snapshot for rendering
    pub fn map(&self) -> &SeatMap {
        &self.map
    }

    /// Local-only membership flip; no remote call, no error path
    pub fn toggle_seat(&mut self, seat_id: SeatId) -> bool {
        self.map.toggle(seat_id)
    }

    pub fn selection_total_cents(&self) -> i64 {
        self.context.unit_price_cents * self.map.selection().len() as i64
    }

    /// Verify-then-reserve for the whole selection. Tolerates exactly
    /// one reserve conflict with a compensating release + retry; a
    /// second conflict fails the attempt and returns every seat to
    /// available client-side.
    pub async fn confirm_selection(&mut self) -> Result<ReservationHold, SaleError> {
        if self.submitting {
            return Err(SaleError::OperationInFlight);
        }
        if self.map.selection().is_empty() {
            return Err(SaleError::EmptySelection);
        }
        self.submitting = true;
        let result = self.reserve_selection().await;
        self.submitting = false;
        result
    }

    async fn reserve_selection(&mut self) -> Result<ReservationHold, SaleError> {
        let seat_ids: Vec<SeatId> = self.map.selection().to_vec();
        let show_id = self.context.show_id;

        // Stale map data is not trusted: re-verify before holding
        let report = self
            .inventory
            .check_availability(&seat_ids)
            .await
            .map_err(SaleError::Inventory)?;
        if !report.all_available {
            self.map.apply_conflicts(&report.unavailable);
            return Err(SaleError::SeatsUnavailable(report.unavailable));
        }

        match self.inventory.reserve_seats(show_id, &seat_ids).await {
            Ok(()) => {}
            Err(InventoryError::Conflict { .. }) => {
                // The verify/reserve window is racy by nature. Compensate
                // once: release whatever subset may have partially
                // reserved, then retry the full set.
                if let Err(err) = self.inventory.release_seats(show_id, &seat_ids).await {
                    warn!(show_id, %err, "compensating release failed");
                }
                match self.inventory.reserve_seats(show_id, &seat_ids).await {
                    Ok(()) => {}
                    Err(InventoryError::Conflict { .. }) => {
                        self.map.deselect_all();
                        return Err(SaleError::ReservationFailed);
                    }
                    Err(err) => return Err(SaleError::Inventory(err)),
                }
            }
            // Transport failures keep the selection intact so the
            // operator can retry without burning the compensation cycle
            Err(err) => return Err(SaleError::Inventory(err)),
        }

        self.map.mark_reserved(&seat_ids);
        debug!(show_id, seats = seat_ids.len(), "seats reserved");
        Ok(ReservationHold { show_id, seat_ids })
    }

    /// Issue one ticket per reserved seat. The payment check happens
    /// before any network call; partial issuance is surfaced, never
    /// rolled back.
    pub async fn finalize_sale(&mut self, payment: CashPayment) -> Result<CompletedSale, SaleError> {
        if self.submitting {
            return Err(SaleError::OperationInFlight);
        }
        let reserved = self.map.reserved_seats();
        if reserved.is_empty() {
            return Err(SaleError::NothingReserved);
        }
        let total_cents = self.context.unit_price_cents * reserved.len() as i64;
        if !payment.covers(total_cents) {
            return Err(SaleError::InsufficientPayment {
                tendered_cents: payment.tendered_cents,
                total_cents,
            });
        }
        self.submitting = true;
        let result = self.issue_tickets(&reserved, total_cents, payment).await;
        self.submitting = false;
        result
    }

    async fn issue_tickets(
        &mut self,
        reserved: &[SeatId],
        total_cents: i64,
        payment: CashPayment,
    ) -> Result<CompletedSale, SaleError> {
        let mut issued = Vec::new();
        let mut failed = Vec::new();

        for &seat_id in reserved {
            let request = IssueTicketRequest {
                show_id: self.context.show_id,
                seat_id,
                buyer_id: self.context.operator_id,
                seller_id: self.context.operator_id,
                price_cents: self.context.unit_price_cents,
            };
            match self.issuance.issue_ticket(&request).await {
                Ok(ticket) => {
                    self.map.mark_sold(seat_id);
                    issued.push(ticket);
                }
                Err(err) => {
                    warn!(seat_id, %err, "ticket issuance failed");
                    failed.push(seat_id);
                }
            }
        }

        if failed.is_empty() {
            debug!(
                show_id = self.context.show_id,
                tickets = issued.len(),
                "sale completed"
            );
            Ok(CompletedSale {
                tickets: issued,
                total_cents,
                change_cents: payment.change_for(total_cents),
            })
        } else {
            Err(SaleError::PartialSaleFailure { issued, failed })
        }
    }

    /// Best-effort cleanup for navigation away or teardown. Release
    /// failures are logged and swallowed: the server-side hold timeout
    /// recovers them, and leaving the flow must never block on cleanup.
    pub async fn abandon(&mut self) {
        self.submitting = false;
        let released = self.map.release_reserved();
        self.map.deselect_all();
        if released.is_empty() {
            return;
        }
        if let Err(err) = self
            .inventory
            .release_seats(self.context.show_id, &released)
            .await
        {
            warn!(
                show_id = self.context.show_id,
                %err,
                "release on abandon failed; server hold timeout will recover"
            );
        }
    }
}
