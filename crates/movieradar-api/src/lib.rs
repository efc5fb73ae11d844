pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::RadarClient;
pub use error::ApiError;
