pub mod inventory;
pub mod operator;
pub mod seat;
pub mod show;
pub mod ticket;

pub use inventory::{InventoryError, IssuanceError, SeatInventory, TicketIssuance};
pub use operator::{Operator, OperatorSession};
pub use seat::{AvailabilityReport, RemoteSeatState, SeatId, SeatRecord, UnavailableSeat};
pub use show::{Movie, Room, Show, ShowSummary};
pub use ticket::{IssueTicketRequest, Ticket, TicketRecord, TicketStatus};
