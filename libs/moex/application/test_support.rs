//! Stub collaborators shared by application tests

use crate::domain::{Instrument, Quote};
use crate::infrastructure::client::iss::{client::Result as FetchResult, MarketDataError, MarketDataSource};
use crate::infrastructure::client::telegram::{notifier::Result as SendResult, Notifier};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scripted `(last, open)` readings; `None` is a malformed response.
/// The last reading repeats once the script runs out.
pub struct Feed {
    readings: Mutex<VecDeque<Option<(f64, f64)>>>,
}

impl Feed {
    pub fn new(readings: Vec<Option<(f64, f64)>>) -> Self {
        Self {
            readings: Mutex::new(readings.into()),
        }
    }

    fn next(&self) -> FetchResult<Quote> {
        let mut readings = self.readings.lock().unwrap();
        let reading = if readings.len() > 1 {
            readings.pop_front().flatten()
        } else {
            readings.front().cloned().flatten()
        };
        reading
            .map(|(last, open)| Quote::new(last, open))
            .ok_or_else(|| MarketDataError::DeserializeFailed("missing field `marketdata`".into()))
    }
}

pub struct StubSource {
    pub index: Feed,
    pub usd_rub: Feed,
    pub calls: AtomicUsize,
}

impl StubSource {
    pub fn new(index: Vec<Option<(f64, f64)>>, usd_rub: Vec<Option<(f64, f64)>>) -> Self {
        Self {
            index: Feed::new(index),
            usd_rub: Feed::new(usd_rub),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketDataSource for StubSource {
    async fn fetch_quote(&self, instrument: Instrument) -> FetchResult<Quote> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match instrument {
            Instrument::Index => self.index.next(),
            Instrument::UsdRub => self.usd_rub.next(),
        }
    }
}

/// Records delivered messages; the first `failures` sends are rejected
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(i64, String)>>,
    failures: AtomicUsize,
}

impl RecordingNotifier {
    pub fn failing(failures: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failures: AtomicUsize::new(failures),
        }
    }

    pub fn messages(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_text(&self, recipient: i64, text: &str) -> SendResult<()> {
        let should_fail = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(teloxide::RequestError::Api(teloxide::ApiError::BotBlocked).into());
        }
        self.sent.lock().unwrap().push((recipient, text.to_string()));
        Ok(())
    }
}
