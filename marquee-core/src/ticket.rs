use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::seat::SeatId;

/// Ticket status. Tickets are immutable after issuance except for the
/// cancellation transition, which the remote service performs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Purchased,
    Cancelled,
}

/// Request to issue one ticket for one reserved seat. One call per seat;
/// the issuance service gives no batch atomicity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueTicketRequest {
    pub show_id: i64,
    pub seat_id: SeatId,
    pub buyer_id: i64,
    pub seller_id: i64,
    pub price_cents: i64,
}

/// A persisted ticket as returned by the issuance service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub show_id: i64,
    pub seat_id: SeatId,
    pub seller_id: i64,
    pub price_cents: i64,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
}

/// A sold ticket joined with its display context, as returned by the
/// sales listing and reprint endpoints. Feeds reports and receipt
/// rendering without further lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRecord {
    pub id: i64,
    pub movie_title: String,
    pub room_name: String,
    pub show_date: NaiveDate,
    pub show_time: NaiveTime,
    pub seat_row: String,
    pub seat_number: i32,
    pub price_cents: i64,
    pub status: TicketStatus,
    pub seller_name: String,
    pub sold_at: DateTime<Utc>,
}

impl TicketRecord {
    pub fn seat_label(&self) -> String {
        format!("{}{}", self.seat_row, self.seat_number)
    }
}
