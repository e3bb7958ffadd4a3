use std::sync::Arc;

use anyhow::bail;
use colored::Colorize;
use marquee_client::app_config::Config;
use marquee_client::{ApiClient, CatalogApi, HttpSeatInventory, TicketsApi};
use marquee_core::operator::OperatorSession;
use marquee_sales::coordinator::{ReservationCoordinator, SaleContext, SaleError};
use marquee_sales::payment::CashPayment;
use marquee_sales::printing::{folio_for, format_cents, render_payment_summary, TicketPrint};

use crate::commands::seatmap::render_map;

/// The full counter flow: verify, reserve, take cash, issue, print.
/// Errors after a hold exists go through `abandon`, except partial
/// issuance, which leaves the failed seats held for manual
/// reconciliation.
pub async fn run(
    show_id: i64,
    seat_labels: &[String],
    tendered_cents: i64,
    config: &Config,
    session: &OperatorSession,
    api: Arc<ApiClient>,
) -> anyhow::Result<()> {
    let show = CatalogApi::new(api.clone()).show(show_id).await?;
    let context = SaleContext {
        show_id,
        operator_id: session.operator.id,
        unit_price_cents: show.base_price_cents,
    };
    let mut coordinator = ReservationCoordinator::new(
        Arc::new(HttpSeatInventory::new(api.clone())),
        Arc::new(TicketsApi::new(api.clone())),
        context,
    );
    coordinator.load_map().await?;

    for label in seat_labels {
        let seat_id = coordinator.map().seat_by_label(label).map(|v| v.id);
        match seat_id {
            Some(id) => {
                if !coordinator.toggle_seat(id) {
                    bail!("seat {label} is not available");
                }
            }
            None => bail!("seat {label} does not exist in this room"),
        }
    }

    let total_cents = coordinator.selection_total_cents();
    let payment = CashPayment::new(tendered_cents);
    // Blocked before any reservation call, mirroring a disabled pay button
    if !payment.covers(total_cents) {
        bail!(
            "tendered {} does not cover total {}",
            format_cents(tendered_cents),
            format_cents(total_cents)
        );
    }

    println!(
        "{} | {} {}  seats {}  total {}",
        show.movie_title.bold(),
        show.date,
        show.time.format("%H:%M"),
        seat_labels.join(", "),
        format_cents(total_cents),
    );

    if let Err(err) = coordinator.confirm_selection().await {
        return match err {
            SaleError::SeatsUnavailable(conflicts) => {
                let labels: Vec<String> = conflicts.iter().map(|c| c.label()).collect();
                render_map(coordinator.map());
                bail!(
                    "seats no longer available: {}; please pick again",
                    labels.join(", ")
                )
            }
            other => Err(other.into()),
        };
    }

    match coordinator.finalize_sale(payment).await {
        Ok(sale) => {
            for ticket in &sale.tickets {
                let seat_label = coordinator
                    .map()
                    .view(ticket.seat_id)
                    .map(|v| v.label())
                    .unwrap_or_default();
                let print = TicketPrint {
                    folio: folio_for(ticket.id, ticket.created_at),
                    movie_title: show.movie_title.clone(),
                    room_name: show.room_name.clone(),
                    show_date: show.date,
                    show_time: show.time,
                    seat_label,
                    price_cents: ticket.price_cents,
                    sold_at: ticket.created_at,
                };
                println!("{}", print.render(&config.printing.header));
            }
            println!("{}", render_payment_summary(sale.total_cents, &payment));
            println!("{}", "sale completed".green().bold());
            Ok(())
        }
        Err(SaleError::PartialSaleFailure { issued, failed }) => {
            // Deliberately no automatic rollback: printed tickets may
            // already be in the customer's hands
            let issued_seats: Vec<String> = issued
                .iter()
                .filter_map(|t| coordinator.map().view(t.seat_id).map(|v| v.label()))
                .collect();
            let failed_seats: Vec<String> = failed
                .iter()
                .filter_map(|id| coordinator.map().view(*id).map(|v| v.label()))
                .collect();
            eprintln!(
                "{}",
                format!(
                    "PARTIAL SALE: issued {} / failed {}; reconcile manually",
                    issued_seats.join(", "),
                    failed_seats.join(", ")
                )
                .red()
                .bold()
            );
            bail!("sale completed partially; failed seats are still held")
        }
        Err(err) => {
            coordinator.abandon().await;
            Err(err.into())
        }
    }
}
