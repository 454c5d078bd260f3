//! Infrastructure Layer
//!
//! Contains implementations of external interfaces (ISS API, Telegram, environment).
//! This layer depends on the domain layer but not on the application layer.

pub mod client;
pub mod config;
pub mod logging;

pub use client::{IssClient, MarketDataError, MarketDataSource, Notifier, NotifyError, TelegramNotifier};
pub use config::{BotConfig, ConfigError};
pub use logging::init_tracing;
