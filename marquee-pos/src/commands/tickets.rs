use marquee_client::app_config::Config;
use marquee_client::TicketsApi;
use marquee_sales::printing::TicketPrint;

pub async fn reprint(
    ticket_id: i64,
    config: &Config,
    tickets: &TicketsApi,
) -> anyhow::Result<()> {
    let record = tickets.print_payload(ticket_id).await?;
    let print = TicketPrint::from_record(&record);
    println!("{}", print.render(&config.printing.header));
    println!("QR: {}", print.qr_data());
    Ok(())
}

/// Cancellation itself happens remotely; the seat shows up released on
/// the next map load.
pub async fn cancel(ticket_id: i64, tickets: &TicketsApi) -> anyhow::Result<()> {
    tickets.cancel_ticket(ticket_id).await?;
    println!("ticket {ticket_id} cancelled");
    Ok(())
}
