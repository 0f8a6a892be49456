pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{ApiClient, ApiError};
pub use endpoints::{Endpoint, HistoryPeriod};
pub use types::{LoginRequest, LoginResponse, UserSummary};
