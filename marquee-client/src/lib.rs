pub mod app_config;
pub mod auth;
pub mod catalog;
pub mod http;
pub mod inventory;
pub mod tickets;

pub use app_config::Config;
pub use auth::AuthApi;
pub use catalog::CatalogApi;
pub use http::{ApiClient, ApiError};
pub use inventory::HttpSeatInventory;
pub use tickets::TicketsApi;
