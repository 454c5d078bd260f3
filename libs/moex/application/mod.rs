//! Application Layer
//!
//! The background monitor and the chat command handlers. Depends on the
//! domain and infrastructure layers.

pub mod dispatcher;
pub mod monitor;
pub mod responder;

#[cfg(test)]
pub(crate) mod test_support;

pub use dispatcher::run_dispatcher;
pub use monitor::{format_alert, AlertLatch, CycleReport, InstrumentOutcome, MarketMonitor, MonitorSettings};
pub use responder::{reply_for, Command, HELP_TEXT};
