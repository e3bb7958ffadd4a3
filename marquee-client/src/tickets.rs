use std::sync::Arc;

use async_trait::async_trait;
use marquee_core::inventory::{IssuanceError, TicketIssuance};
use marquee_core::ticket::{IssueTicketRequest, Ticket, TicketRecord};

use crate::http::{Acknowledgement, ApiClient, ApiError};

/// Ticket endpoints of the box-office API: issuance, the sales log,
/// reprint payloads, and cancellation requests.
pub struct TicketsApi {
    api: Arc<ApiClient>,
}

impl TicketsApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Full sales log with display context, for reports
    pub async fn list_sales(&self) -> Result<Vec<TicketRecord>, ApiError> {
        self.api.get("/tickets").await
    }

    /// Reprint payload for an already-issued ticket
    pub async fn print_payload(&self, ticket_id: i64) -> Result<TicketRecord, ApiError> {
        self.api.get(&format!("/tickets/{ticket_id}/print")).await
    }

    /// Ask the remote service to cancel a ticket. Seat state is not
    /// touched here; the next map load reflects the released seat.
    pub async fn cancel_ticket(&self, ticket_id: i64) -> Result<(), ApiError> {
        let _: Acknowledgement = self.api.delete(&format!("/tickets/{ticket_id}")).await?;
        Ok(())
    }
}

#[async_trait]
impl TicketIssuance for TicketsApi {
    async fn issue_ticket(&self, request: &IssueTicketRequest) -> Result<Ticket, IssuanceError> {
        self.api.post("/tickets", request).await.map_err(|err| match err {
            ApiError::Conflict { detail, .. } => IssuanceError::Rejected(detail),
            ApiError::Status { status: 400, detail } => IssuanceError::Rejected(detail),
            ApiError::Status { status, detail } => {
                IssuanceError::Transport(format!("{status}: {detail}"))
            }
            ApiError::Transport(err) => IssuanceError::Transport(err.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use marquee_core::ticket::TicketStatus;

    use super::*;

    #[test]
    fn test_ticket_record_shape() {
        let record: TicketRecord = serde_json::from_str(
            r#"{
                "id": 12,
                "movie_title": "Metropolis",
                "room_name": "Room 1",
                "show_date": "2025-07-04",
                "show_time": "19:30:00",
                "seat_row": "C",
                "seat_number": 7,
                "price_cents": 8500,
                "status": "PURCHASED",
                "seller_name": "ana",
                "sold_at": "2025-07-01T18:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(record.seat_label(), "C7");
        assert_eq!(record.status, TicketStatus::Purchased);
    }

    #[test]
    fn test_issue_request_shape() {
        let request = IssueTicketRequest {
            show_id: 3,
            seat_id: 41,
            buyer_id: 7,
            seller_id: 7,
            price_cents: 8500,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["show_id"], 3);
        assert_eq!(json["seat_id"], 41);
        assert_eq!(json["price_cents"], 8500);
    }
}
