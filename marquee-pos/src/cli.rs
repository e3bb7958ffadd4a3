use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "marquee", about = "Box-office terminal for the Marquee ticketing API", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Movie catalog management
    Movies {
        #[command(subcommand)]
        action: MoviesAction,
    },
    /// Room and seat-grid management
    Rooms {
        #[command(subcommand)]
        action: RoomsAction,
    },
    /// Show scheduling
    Shows {
        #[command(subcommand)]
        action: ShowsAction,
    },
    /// Render the seat map for a show
    Map { show_id: i64 },
    /// Sell seats for a show
    Sell {
        show_id: i64,
        /// Seat labels, e.g. A1,A2
        #[arg(value_delimiter = ',', required = true)]
        seats: Vec<String>,
        /// Cash received, e.g. 200.00
        #[arg(long)]
        tendered: f64,
    },
    /// Reprint an issued ticket
    Reprint { ticket_id: i64 },
    /// Ask the box office to cancel an issued ticket
    CancelTicket { ticket_id: i64 },
    /// Aggregate sold tickets into a sales report
    Report {
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Filter by movie title
        #[arg(long)]
        movie: Option<String>,
        /// Filter by room name
        #[arg(long)]
        room: Option<String>,
        /// Write the rows to a CSV file instead of the terminal
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum MoviesAction {
    List,
    Add {
        #[arg(long)]
        title: String,
        /// Duration in minutes
        #[arg(long)]
        duration: i32,
        /// Classification code (AA, A, B, B15, C, D)
        #[arg(long)]
        rating: String,
        #[arg(long)]
        genre: String,
        #[arg(long)]
        synopsis: Option<String>,
        #[arg(long)]
        poster_url: Option<String>,
    },
    /// Pull a movie off the billboard
    Retire { movie_id: i64 },
    Remove { movie_id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum RoomsAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        capacity: i32,
    },
    /// Replace a room's seat grid with a uniform lettered layout
    Configure {
        room_id: i64,
        #[arg(long)]
        rows: u8,
        #[arg(long)]
        seats_per_row: i32,
        /// Seat labels to disable, e.g. A1,B4
        #[arg(long, value_delimiter = ',')]
        disable: Vec<String>,
    },
    /// Print a room's current grid
    Seats { room_id: i64 },
    DisableSeat { room_id: i64, seat_id: i64 },
    EnableSeat { room_id: i64, seat_id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum ShowsAction {
    List,
    Schedule {
        #[arg(long)]
        movie_id: i64,
        #[arg(long)]
        room_id: i64,
        #[arg(long)]
        date: NaiveDate,
        /// 24h time, e.g. 19:30
        #[arg(long)]
        time: String,
        /// Ticket price, e.g. 85.00
        #[arg(long)]
        price: f64,
    },
    /// Move an existing show or change its price
    Reschedule {
        show_id: i64,
        #[arg(long)]
        date: Option<NaiveDate>,
        /// 24h time, e.g. 19:30
        #[arg(long)]
        time: Option<String>,
        /// Ticket price, e.g. 85.00
        #[arg(long)]
        price: Option<f64>,
    },
    Cancel { show_id: i64 },
}

/// Money arrives on the command line in whole currency units
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_to_cents_rounds() {
        assert_eq!(to_cents(85.0), 8_500);
        assert_eq!(to_cents(0.015), 2);
        assert_eq!(to_cents(199.99), 19_999);
    }

    #[test]
    fn test_sell_parses_seat_list() {
        let cli = Cli::parse_from(["marquee", "sell", "3", "A1,A2", "--tendered", "200"]);
        match cli.command {
            Command::Sell {
                show_id,
                seats,
                tendered,
            } => {
                assert_eq!(show_id, 3);
                assert_eq!(seats, vec!["A1", "A2"]);
                assert!((tendered - 200.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
