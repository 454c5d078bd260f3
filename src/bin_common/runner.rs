//! Binary runner utilities
//!
//! Provides a standardized way to run binaries with a startup banner
//! and the monitor timing.

use moex::application::MonitorSettings;
use std::time::Duration;
use tracing::info;

/// Configuration for running a binary application
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Name of the binary (for logging)
    pub name: String,
    /// Delay before the first monitor cycle
    pub startup_delay_secs: u64,
    /// Monitor poll interval
    pub poll_interval_secs: u64,
}

impl RunConfig {
    /// Create a new run configuration with the standard monitor timing
    pub fn new(name: impl Into<String>) -> Self {
        let defaults = MonitorSettings::default();
        Self {
            name: name.into(),
            startup_delay_secs: defaults.startup_delay.as_secs(),
            poll_interval_secs: defaults.poll_interval.as_secs(),
        }
    }

    pub fn monitor_settings(&self) -> MonitorSettings {
        MonitorSettings {
            startup_delay: Duration::from_secs(self.startup_delay_secs),
            poll_interval: Duration::from_secs(self.poll_interval_secs),
        }
    }
}

/// Trait for binary applications
pub trait BinaryRunner {
    /// Run the application until it stops
    async fn run(&mut self) -> anyhow::Result<()>;

    /// Get the run configuration
    fn config(&self) -> &RunConfig;

    /// Print startup banner
    fn print_banner(&self) {
        let config = self.config();
        info!("");
        info!("========================================");
        info!("Starting {}", config.name);
        info!(
            "Poll interval: {}s (first check after {}s)",
            config.poll_interval_secs, config.startup_delay_secs
        );
        info!("Press Ctrl+C to stop");
        info!("========================================");
        info!("");
    }

    /// Print shutdown banner
    fn print_shutdown(&self) {
        info!("");
        info!("========================================");
        info!("{} stopped", self.config().name);
        info!("========================================");
    }

    /// Execute the binary with banner and shutdown logging
    async fn execute(&mut self) -> anyhow::Result<()> {
        self.print_banner();
        let result = self.run().await;
        self.print_shutdown();
        result
    }
}
