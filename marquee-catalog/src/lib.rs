pub mod movie;
pub mod room;
pub mod show;

pub use movie::{MovieDraft, MovieUpdate, RATINGS};
pub use room::{RoomDraft, RoomLayout, SeatBatch, SeatSpec};
pub use show::{ShowDraft, ShowUpdate};

/// Validation failures raised before anything is sent to the catalog API
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    #[error("row {0} already exists")]
    DuplicateRow(String),

    #[error("row {0} not found")]
    RowNotFound(String),

    #[error("seat {0} not found in layout")]
    SeatNotFound(String),
}
