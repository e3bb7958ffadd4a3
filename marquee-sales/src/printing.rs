use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use marquee_core::ticket::TicketRecord;
use serde::Serialize;

use crate::payment::CashPayment;

/// Folio format: MRQ-{unix seconds of sale}-{ticket id}
pub fn folio_for(ticket_id: i64, sold_at: DateTime<Utc>) -> String {
    format!("MRQ-{}-{:06}", sold_at.timestamp(), ticket_id)
}

pub fn format_cents(cents: i64) -> String {
    format!("${:.2}", cents as f64 / 100.0)
}

/// Everything the counter printer needs for one ticket
#[derive(Debug, Clone, Serialize)]
pub struct TicketPrint {
    pub folio: String,
    pub movie_title: String,
    pub room_name: String,
    pub show_date: NaiveDate,
    pub show_time: NaiveTime,
    pub seat_label: String,
    pub price_cents: i64,
    pub sold_at: DateTime<Utc>,
}

impl TicketPrint {
    pub fn from_record(record: &TicketRecord) -> Self {
        Self {
            folio: folio_for(record.id, record.sold_at),
            movie_title: record.movie_title.clone(),
            room_name: record.room_name.clone(),
            show_date: record.show_date,
            show_time: record.show_time,
            seat_label: record.seat_label(),
            price_cents: record.price_cents,
            sold_at: record.sold_at,
        }
    }

    /// Payload embedded in the stub's QR code
    pub fn qr_data(&self) -> String {
        serde_json::json!({
            "folio": self.folio,
            "seat": self.seat_label,
            "show_date": self.show_date,
            "show_time": self.show_time,
        })
        .to_string()
    }

    /// Plain-text stub for the counter printer
    pub fn render(&self, header: &str) -> String {
        format!(
            "{header}\n\
             ----------------------------------------\n\
             {title}\n\
             Room {room}  Seat {seat}\n\
             {date} {time}\n\
             Price: {price}\n\
             Folio: {folio}\n\
             ----------------------------------------",
            header = header,
            title = self.movie_title,
            room = self.room_name,
            seat = self.seat_label,
            date = self.show_date,
            time = self.show_time.format("%H:%M"),
            price = format_cents(self.price_cents),
            folio = self.folio,
        )
    }
}

/// Payment summary appended after the last stub of a sale
pub fn render_payment_summary(total_cents: i64, payment: &CashPayment) -> String {
    format!(
        "Total:    {}\nTendered: {}\nChange:   {}",
        format_cents(total_cents),
        format_cents(payment.tendered_cents),
        format_cents(payment.change_for(total_cents)),
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use marquee_core::ticket::TicketStatus;

    use super::*;

    fn sample_record() -> TicketRecord {
        TicketRecord {
            id: 42,
            movie_title: "Metropolis".to_string(),
            room_name: "Room 1".to_string(),
            show_date: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            show_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            seat_row: "C".to_string(),
            seat_number: 7,
            price_cents: 8_500,
            status: TicketStatus::Purchased,
            seller_name: "ana".to_string(),
            sold_at: Utc.with_ymd_and_hms(2025, 7, 1, 18, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_folio_is_deterministic_for_a_ticket() {
        let record = sample_record();
        let print = TicketPrint::from_record(&record);
        assert_eq!(print.folio, folio_for(42, record.sold_at));
        assert!(print.folio.starts_with("MRQ-"));
        assert!(print.folio.ends_with("-000042"));
    }

    #[test]
    fn test_render_includes_seat_and_price() {
        let print = TicketPrint::from_record(&sample_record());
        let stub = print.render("Marquee Cinemas");
        assert!(stub.contains("Metropolis"));
        assert!(stub.contains("Seat C7"));
        assert!(stub.contains("$85.00"));
        assert!(stub.contains("19:30"));
    }

    #[test]
    fn test_payment_summary() {
        let summary = render_payment_summary(17_000, &CashPayment::new(20_000));
        assert!(summary.contains("$170.00"));
        assert!(summary.contains("$200.00"));
        assert!(summary.contains("$30.00"));
    }
}
