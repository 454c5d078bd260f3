//! External API clients
//!
//! ISS for market data, Telegram for outbound messages.

pub mod iss;
pub mod telegram;

pub use iss::{IssClient, MarketDataError, MarketDataSource};
pub use telegram::{Notifier, NotifyError, TelegramNotifier};
