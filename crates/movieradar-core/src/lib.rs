pub mod card;
pub mod config;
pub mod debounce;
pub mod details;
pub mod error;
pub mod models;
pub mod pagination;
pub mod search;
pub mod storage;
pub mod trending;
pub mod watchlist;
