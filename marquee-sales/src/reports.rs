use std::collections::BTreeMap;
use std::io;

use chrono::{NaiveDate, NaiveTime};
use marquee_core::ticket::{TicketRecord, TicketStatus};
use serde::Serialize;

use crate::printing::format_cents;

/// Filters applied to the sales log before aggregation. All fields are
/// optional and combine with AND.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub movie_title: Option<String>,
    pub room_name: Option<String>,
}

impl ReportFilter {
    fn matches(&self, record: &TicketRecord) -> bool {
        if record.status != TicketStatus::Purchased {
            return false;
        }
        let sale_date = record.sold_at.date_naive();
        if self.from.is_some_and(|from| sale_date < from) {
            return false;
        }
        if self.to.is_some_and(|to| sale_date > to) {
            return false;
        }
        if self
            .movie_title
            .as_deref()
            .is_some_and(|title| !record.movie_title.eq_ignore_ascii_case(title))
        {
            return false;
        }
        if self
            .room_name
            .as_deref()
            .is_some_and(|room| !record.room_name.eq_ignore_ascii_case(room))
        {
            return false;
        }
        true
    }
}

/// One aggregated line: every ticket sold for one show
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportRow {
    pub movie_title: String,
    pub room_name: String,
    pub show_date: NaiveDate,
    pub show_time: NaiveTime,
    pub tickets_sold: usize,
    pub revenue_cents: i64,
}

/// Sales aggregated per show plus grand totals
#[derive(Debug, Serialize)]
pub struct SalesReport {
    pub rows: Vec<ReportRow>,
    pub tickets_sold: usize,
    pub revenue_cents: i64,
}

impl SalesReport {
    pub fn build(records: &[TicketRecord], filter: &ReportFilter) -> Self {
        let mut grouped: BTreeMap<(String, String, NaiveDate, NaiveTime), (usize, i64)> =
            BTreeMap::new();

        for record in records.iter().filter(|r| filter.matches(r)) {
            let key = (
                record.movie_title.clone(),
                record.room_name.clone(),
                record.show_date,
                record.show_time,
            );
            let entry = grouped.entry(key).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += record.price_cents;
        }

        let rows: Vec<ReportRow> = grouped
            .into_iter()
            .map(
                |((movie_title, room_name, show_date, show_time), (tickets_sold, revenue))| {
                    ReportRow {
                        movie_title,
                        room_name,
                        show_date,
                        show_time,
                        tickets_sold,
                        revenue_cents: revenue,
                    }
                },
            )
            .collect();

        let tickets_sold = rows.iter().map(|r| r.tickets_sold).sum();
        let revenue_cents = rows.iter().map(|r| r.revenue_cents).sum();

        Self {
            rows,
            tickets_sold,
            revenue_cents,
        }
    }

    /// Write the aggregated rows plus a totals line
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["movie", "room", "date", "time", "tickets_sold", "revenue"])?;
        for row in &self.rows {
            csv.write_record(&[
                row.movie_title.clone(),
                row.room_name.clone(),
                row.show_date.to_string(),
                row.show_time.format("%H:%M").to_string(),
                row.tickets_sold.to_string(),
                format_cents(row.revenue_cents),
            ])?;
        }
        csv.write_record(&[
            "TOTAL".to_string(),
            String::new(),
            String::new(),
            String::new(),
            self.tickets_sold.to_string(),
            format_cents(self.revenue_cents),
        ])?;
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn ticket(
        id: i64,
        movie: &str,
        room: &str,
        sold_day: u32,
        price_cents: i64,
        status: TicketStatus,
    ) -> TicketRecord {
        TicketRecord {
            id,
            movie_title: movie.to_string(),
            room_name: room.to_string(),
            show_date: NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
            show_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            seat_row: "A".to_string(),
            seat_number: id as i32,
            price_cents,
            status,
            seller_name: "ana".to_string(),
            sold_at: Utc.with_ymd_and_hms(2025, 7, sold_day, 12, 0, 0).unwrap(),
        }
    }

    fn sample() -> Vec<TicketRecord> {
        vec![
            ticket(1, "Metropolis", "Room 1", 1, 8_500, TicketStatus::Purchased),
            ticket(2, "Metropolis", "Room 1", 2, 8_500, TicketStatus::Purchased),
            ticket(3, "Nosferatu", "Room 2", 2, 9_000, TicketStatus::Purchased),
            ticket(4, "Nosferatu", "Room 2", 3, 9_000, TicketStatus::Cancelled),
        ]
    }

    #[test]
    fn test_aggregates_per_show_and_totals() {
        let report = SalesReport::build(&sample(), &ReportFilter::default());
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.tickets_sold, 3);
        assert_eq!(report.revenue_cents, 26_000);

        let metropolis = &report.rows[0];
        assert_eq!(metropolis.movie_title, "Metropolis");
        assert_eq!(metropolis.tickets_sold, 2);
        assert_eq!(metropolis.revenue_cents, 17_000);
    }

    #[test]
    fn test_cancelled_tickets_are_excluded() {
        let report = SalesReport::build(&sample(), &ReportFilter::default());
        let nosferatu = report
            .rows
            .iter()
            .find(|r| r.movie_title == "Nosferatu")
            .unwrap();
        assert_eq!(nosferatu.tickets_sold, 1);
    }

    #[test]
    fn test_date_range_filter() {
        let filter = ReportFilter {
            from: Some(NaiveDate::from_ymd_opt(2025, 7, 2).unwrap()),
            to: Some(NaiveDate::from_ymd_opt(2025, 7, 2).unwrap()),
            ..ReportFilter::default()
        };
        let report = SalesReport::build(&sample(), &filter);
        assert_eq!(report.tickets_sold, 2);
    }

    #[test]
    fn test_movie_and_room_filters() {
        let filter = ReportFilter {
            movie_title: Some("metropolis".to_string()),
            room_name: Some("Room 1".to_string()),
            ..ReportFilter::default()
        };
        let report = SalesReport::build(&sample(), &filter);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.tickets_sold, 2);
    }

    #[test]
    fn test_csv_export() {
        let report = SalesReport::build(&sample(), &ReportFilter::default());
        let mut buffer = Vec::new();
        report.write_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.starts_with("movie,room,date,time,tickets_sold,revenue"));
        assert!(csv.contains("Metropolis,Room 1,2025-07-10,19:30,2,$170.00"));
        assert!(csv.contains("TOTAL,,,,3,$260.00"));
    }
}
