use std::sync::Arc;

use async_trait::async_trait;
use marquee_core::inventory::{InventoryError, SeatInventory};
use marquee_core::seat::{AvailabilityReport, SeatId, SeatRecord};
use serde::Serialize;
use tracing::debug;

use crate::http::{Acknowledgement, ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct CheckAvailabilityRequest<'a> {
    seat_ids: &'a [SeatId],
}

#[derive(Debug, Serialize)]
struct SeatSetRequest<'a> {
    show_id: i64,
    seat_ids: &'a [SeatId],
}

fn map_error(err: ApiError) -> InventoryError {
    match err {
        ApiError::Conflict { seat_ids, .. } => InventoryError::Conflict { seat_ids },
        ApiError::Status { status: 404, detail } => InventoryError::NotFound(detail),
        ApiError::Status { status, detail } => {
            InventoryError::Transport(format!("{status}: {detail}"))
        }
        ApiError::Transport(err) => InventoryError::Transport(err.to_string()),
    }
}

/// Seat endpoints of the box-office API
pub struct HttpSeatInventory {
    api: Arc<ApiClient>,
}

impl HttpSeatInventory {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SeatInventory for HttpSeatInventory {
    async fn seat_map(&self, show_id: i64) -> Result<Vec<SeatRecord>, InventoryError> {
        self.api
            .get(&format!("/shows/{show_id}/seats"))
            .await
            .map_err(map_error)
    }

    async fn check_availability(
        &self,
        seat_ids: &[SeatId],
    ) -> Result<AvailabilityReport, InventoryError> {
        self.api
            .post("/seats/check-availability", &CheckAvailabilityRequest { seat_ids })
            .await
            .map_err(map_error)
    }

    async fn reserve_seats(
        &self,
        show_id: i64,
        seat_ids: &[SeatId],
    ) -> Result<(), InventoryError> {
        let _: Acknowledgement = self
            .api
            .post("/seats/reserve", &SeatSetRequest { show_id, seat_ids })
            .await
            .map_err(map_error)?;
        Ok(())
    }

    async fn release_seats(
        &self,
        show_id: i64,
        seat_ids: &[SeatId],
    ) -> Result<(), InventoryError> {
        let result: Result<Acknowledgement, ApiError> = self
            .api
            .post("/seats/release", &SeatSetRequest { show_id, seat_ids })
            .await;
        match result {
            Ok(_) => Ok(()),
            // Idempotent by contract: the service rejecting seats that
            // are already free still counts as a successful release
            Err(ApiError::Status { status: 400, detail }) => {
                debug!(detail, "release treated as idempotent success");
                Ok(())
            }
            Err(err) => Err(map_error(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_maps_to_inventory_conflict() {
        let err = map_error(ApiError::Conflict {
            detail: "taken".to_string(),
            seat_ids: vec![5, 6],
        });
        assert!(matches!(
            err,
            InventoryError::Conflict { seat_ids } if seat_ids == vec![5, 6]
        ));
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err = map_error(ApiError::Status {
            status: 404,
            detail: "show not found".to_string(),
        });
        assert!(matches!(err, InventoryError::NotFound(_)));
    }

    #[test]
    fn test_seat_set_request_shape() {
        let request = SeatSetRequest {
            show_id: 3,
            seat_ids: &[1, 2],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["show_id"], 3);
        assert_eq!(json["seat_ids"], serde_json::json!([1, 2]));
    }
}
