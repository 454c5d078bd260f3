//! ISS market data client and types

pub mod client;
pub mod types;

pub use client::{IssClient, MarketDataError, MarketDataSource, ISS_BASE_URL};
pub use types::{IssResponse, IssTable};
