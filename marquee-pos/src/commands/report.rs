use std::fs::File;
use std::path::PathBuf;

use chrono::NaiveDate;
use colored::Colorize;
use marquee_client::TicketsApi;
use marquee_sales::printing::format_cents;
use marquee_sales::reports::{ReportFilter, SalesReport};

pub async fn run(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    movie: Option<String>,
    room: Option<String>,
    csv: Option<PathBuf>,
    tickets: &TicketsApi,
) -> anyhow::Result<()> {
    let records = tickets.list_sales().await?;
    let filter = ReportFilter {
        from,
        to,
        movie_title: movie,
        room_name: room,
    };
    let report = SalesReport::build(&records, &filter);

    if let Some(path) = csv {
        let file = File::create(&path)?;
        report.write_csv(file)?;
        println!("wrote {} rows to {}", report.rows.len(), path.display());
        return Ok(());
    }

    println!(
        "{:<32} {:<12} {:<12} {:<6} {:>8} {:>12}",
        "movie".bold(),
        "room".bold(),
        "date".bold(),
        "time".bold(),
        "tickets".bold(),
        "revenue".bold(),
    );
    for row in &report.rows {
        println!(
            "{:<32} {:<12} {:<12} {:<6} {:>8} {:>12}",
            row.movie_title,
            row.room_name,
            row.show_date.to_string(),
            row.show_time.format("%H:%M").to_string(),
            row.tickets_sold,
            format_cents(row.revenue_cents),
        );
    }
    println!(
        "{:<32} {:<12} {:<12} {:<6} {:>8} {:>12}",
        "TOTAL".bold(),
        "",
        "",
        "",
        report.tickets_sold,
        format_cents(report.revenue_cents).bold(),
    );
    Ok(())
}
