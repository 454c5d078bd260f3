//! Moscow Exchange market monitor
//!
//! Polls the MOEX ISS API for the IMOEX index and the USD/RUB rate,
//! answers chat commands and alerts the owner once per instrument when
//! the move from the session open reaches the threshold.

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used items
pub use application::{CycleReport, InstrumentOutcome, MarketMonitor, MonitorSettings};
pub use domain::{Direction, Instrument, Quote, ALERT_THRESHOLD_PCT};
pub use infrastructure::{
    init_tracing, BotConfig, ConfigError, IssClient, MarketDataError, MarketDataSource, Notifier,
    NotifyError, TelegramNotifier,
};
