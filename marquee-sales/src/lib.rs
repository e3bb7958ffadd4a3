pub mod coordinator;
pub mod payment;
pub mod printing;
pub mod reports;
pub mod seatmap;

pub use coordinator::{
    CompletedSale, ReservationCoordinator, ReservationHold, SaleContext, SaleError,
};
pub use payment::CashPayment;
pub use printing::TicketPrint;
pub use reports::{ReportFilter, ReportRow, SalesReport};
pub use seatmap::{SeatMap, SeatStatus, SeatView};
