use std::sync::Arc;

use colored::Colorize;
use marquee_client::{ApiClient, HttpSeatInventory};
use marquee_core::inventory::SeatInventory;
use marquee_sales::seatmap::{SeatMap, SeatStatus};

pub async fn show_map(show_id: i64, api: Arc<ApiClient>) -> anyhow::Result<()> {
    let inventory = HttpSeatInventory::new(api);
    let records = inventory.seat_map(show_id).await?;
    render_map(&SeatMap::from_records(records));
    Ok(())
}

/// Print the grid row by row, colored by status
pub fn render_map(map: &SeatMap) {
    for (row, seats) in map.by_rows() {
        let mut line = format!("{row:>3}  ");
        for seat in seats {
            let cell = format!("[{:>2}]", seat.number);
            let cell = match seat.status {
                SeatStatus::Available => cell.green(),
                SeatStatus::Selected => cell.cyan().bold(),
                SeatStatus::Reserved => cell.yellow(),
                SeatStatus::Sold | SeatStatus::Occupied => cell.red(),
                SeatStatus::Disabled => cell.dimmed(),
            };
            line.push_str(&format!("{cell} "));
        }
        println!("{line}");
    }
    println!(
        "\n     {} available  {} selected  {} reserved  {} taken  {} disabled",
        "[  ]".green(),
        "[  ]".cyan().bold(),
        "[  ]".yellow(),
        "[  ]".red(),
        "[  ]".dimmed(),
    );
}
