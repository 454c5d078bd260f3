//! Background market monitor
//!
//! Polls both instruments on a fixed interval and alerts the owner the first
//! time an instrument's move from the open reaches [`ALERT_THRESHOLD_PCT`].
//! Each instrument alerts at most once per process run.

use crate::domain::{Instrument, Quote, ALERT_THRESHOLD_PCT};
use crate::infrastructure::client::iss::{client::Result as FetchResult, MarketDataSource};
use crate::infrastructure::client::telegram::Notifier;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Timing of the monitor loop
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    /// Delay before the first check, lets the bot finish starting up
    pub startup_delay: Duration,
    /// Pause between cycles
    pub poll_interval: Duration,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            startup_delay: Duration::from_secs(3),
            poll_interval: Duration::from_secs(60),
        }
    }
}

/// Per-instrument "already alerted" flags. Set once, never cleared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AlertLatch {
    index_notified: bool,
    usd_notified: bool,
}

impl AlertLatch {
    pub fn is_notified(&self, instrument: Instrument) -> bool {
        match instrument {
            Instrument::Index => self.index_notified,
            Instrument::UsdRub => self.usd_notified,
        }
    }

    fn mark_notified(&mut self, instrument: Instrument) {
        match instrument {
            Instrument::Index => self.index_notified = true,
            Instrument::UsdRub => self.usd_notified = true,
        }
    }
}

/// What happened to one instrument in one cycle
#[derive(Debug, Clone)]
pub enum InstrumentOutcome {
    /// Quote could not be fetched; retried next cycle
    FetchFailed(String),
    /// Move is below the threshold
    WithinThreshold(Quote),
    /// Threshold reached, but this instrument has already alerted
    AlreadyNotified(Quote),
    /// Alert delivered and latched
    Alerted(Quote),
    /// Alert could not be delivered; latch left open
    SendFailed { quote: Quote, reason: String },
}

/// Outcomes of a single monitor cycle
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub index: InstrumentOutcome,
    pub usd_rub: InstrumentOutcome,
}

impl CycleReport {
    pub fn get(&self, instrument: Instrument) -> &InstrumentOutcome {
        match instrument {
            Instrument::Index => &self.index,
            Instrument::UsdRub => &self.usd_rub,
        }
    }

    pub fn alerts_sent(&self) -> usize {
        Instrument::ALL
            .iter()
            .filter(|i| matches!(self.get(**i), InstrumentOutcome::Alerted(_)))
            .count()
    }
}

/// Alert text sent to the owner (HTML)
pub fn format_alert(instrument: Instrument, quote: &Quote) -> String {
    format!(
        "📢 <b>{}</b>\n{} изменился на {} <b>{:.2}%</b> от открытия.",
        instrument.alert_headline(),
        instrument.alert_subject(),
        quote.direction().arrow(),
        quote.percent_change
    )
}

/// Long-running threshold monitor
pub struct MarketMonitor {
    source: Arc<dyn MarketDataSource>,
    notifier: Arc<dyn Notifier>,
    owner_chat_id: i64,
    settings: MonitorSettings,
    latch: AlertLatch,
}

impl MarketMonitor {
    pub fn new(
        source: Arc<dyn MarketDataSource>,
        notifier: Arc<dyn Notifier>,
        owner_chat_id: i64,
        settings: MonitorSettings,
    ) -> Self {
        Self {
            source,
            notifier,
            owner_chat_id,
            settings,
            latch: AlertLatch::default(),
        }
    }

    pub fn latch(&self) -> AlertLatch {
        self.latch
    }

    /// Run forever: startup delay, then one cycle per poll interval
    pub async fn run(mut self) {
        info!(
            "Market monitor started (threshold: {:.2}%, interval: {:?})",
            ALERT_THRESHOLD_PCT, self.settings.poll_interval
        );
        sleep(self.settings.startup_delay).await;

        loop {
            let report = self.run_cycle().await;
            debug!("Monitor cycle done, {} alert(s) sent", report.alerts_sent());
            sleep(self.settings.poll_interval).await;
        }
    }

    /// Check both instruments once
    ///
    /// Fetches run concurrently; a failure on one instrument never affects
    /// the other.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let (index, usd_rub) = tokio::join!(
            self.source.fetch_quote(Instrument::Index),
            self.source.fetch_quote(Instrument::UsdRub),
        );

        CycleReport {
            index: self.evaluate(Instrument::Index, index).await,
            usd_rub: self.evaluate(Instrument::UsdRub, usd_rub).await,
        }
    }

    async fn evaluate(&mut self, instrument: Instrument, fetched: FetchResult<Quote>) -> InstrumentOutcome {
        let quote = match fetched {
            Ok(quote) => quote,
            Err(e) => {
                warn!("Monitor: failed to fetch {}: {}", instrument, e);
                return InstrumentOutcome::FetchFailed(e.to_string());
            }
        };

        debug!(
            "{}: {:.2}% from open at {}",
            instrument,
            quote.percent_change,
            quote.as_of()
        );

        if !quote.crosses_threshold() {
            return InstrumentOutcome::WithinThreshold(quote);
        }
        if self.latch.is_notified(instrument) {
            return InstrumentOutcome::AlreadyNotified(quote);
        }

        let text = format_alert(instrument, &quote);
        match self.notifier.send_text(self.owner_chat_id, &text).await {
            Ok(()) => {
                self.latch.mark_notified(instrument);
                info!(
                    "📢 Alert sent: {} moved {:.2}% from open (as of {})",
                    instrument,
                    quote.percent_change,
                    quote.as_of()
                );
                InstrumentOutcome::Alerted(quote)
            }
            Err(e) => {
                warn!("Monitor: failed to send {} alert: {}", instrument, e);
                InstrumentOutcome::SendFailed {
                    quote,
                    reason: e.to_string(),
                }
            }
        }
    }
}
