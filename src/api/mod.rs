pub mod client;
pub mod models;

pub use client::AccountClient;
pub use models::{AccountRecord, ApiError};
