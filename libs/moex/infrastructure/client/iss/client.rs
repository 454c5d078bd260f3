//! ISS (Moscow Exchange Informational & Statistical Server) client
//!
//! Fetches the `marketdata` block of a security and turns it into a [`Quote`].

use super::types::IssResponse;
use crate::domain::{Instrument, Quote};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default ISS base URL
pub const ISS_BASE_URL: &str = "https://iss.moex.com";

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),

    #[error("marketdata table has no rows")]
    EmptyTable,

    #[error("column {0} not found in marketdata")]
    MissingColumn(String),

    #[error("column {column} is not a number: {value}")]
    InvalidValue { column: String, value: String },

    #[error("opening price is zero, percent change undefined")]
    ZeroOpen,
}

pub type Result<T> = std::result::Result<T, MarketDataError>;

/// Source of quotes for the monitored instruments
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch the current quote of `instrument` from its fixed endpoint
    async fn fetch_quote(&self, instrument: Instrument) -> Result<Quote>;
}

/// ISS REST client
pub struct IssClient {
    base_url: String,
    client: Client,
}

impl IssClient {
    /// Create a client against `base_url` (normally [`ISS_BASE_URL`])
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch and decode the ISS document of an instrument
    async fn get_marketdata(&self, instrument: Instrument) -> Result<IssResponse> {
        let url = format!("{}{}", self.base_url, instrument.iss_path());
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MarketDataError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| MarketDataError::DeserializeFailed(e.to_string()))
    }
}

#[async_trait]
impl MarketDataSource for IssClient {
    async fn fetch_quote(&self, instrument: Instrument) -> Result<Quote> {
        let doc = self.get_marketdata(instrument).await?;

        let last = doc.marketdata.first_row_number("LAST")?;
        let open = doc.marketdata.first_row_number("OPEN")?;
        if open == 0.0 {
            return Err(MarketDataError::ZeroOpen);
        }

        let quote = Quote::new(last, open);
        debug!(
            "{} ({}): last={} open={} change={:.4}% at {}",
            instrument,
            instrument.ticker(),
            quote.last,
            quote.open,
            quote.percent_change,
            quote.as_of()
        );
        Ok(quote)
    }
}
