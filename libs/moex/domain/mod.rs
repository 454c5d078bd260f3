//! Domain Layer
//!
//! Instruments and quotes. No I/O happens here.

pub mod instrument;
pub mod quote;

pub use instrument::Instrument;
pub use quote::{Direction, Quote, ALERT_THRESHOLD_PCT};
