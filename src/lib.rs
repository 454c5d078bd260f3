//! MOEX Monitor Bot - Main Library
//!
//! Telegram bot that reports the IMOEX index and the USD/RUB rate on request
//! and alerts its owner once per instrument when a move from the session
//! open reaches 1%.
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for binary executables (env file, runner)
//! - **moex**: Market data client, monitor and command handlers (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use moex_monitor_bot::bin_common::{load_env_file, EnvFile};
//! use moex_monitor_bot::moex::application::MarketMonitor;
//! ```

// Re-export workspace libraries for convenience
pub use moex;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;
    pub mod runner;

    pub use cli::{load_env_file, EnvFile};
    pub use runner::{BinaryRunner, RunConfig};
}
