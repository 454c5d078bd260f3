//! Quote snapshot and derived percent change

use chrono::{DateTime, Utc};
use std::fmt;

/// Absolute percent move from the open that triggers an alert (inclusive)
pub const ALERT_THRESHOLD_PCT: f64 = 1.0;

/// Direction of the move from the open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Up only for a strictly positive change; an unchanged price reads as down
    pub fn of(percent_change: f64) -> Self {
        if percent_change > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Up => "🔺",
            Direction::Down => "🔻",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.arrow())
    }
}

/// Last and opening value of an instrument at fetch time
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub last: f64,
    pub open: f64,
    pub percent_change: f64,
    pub fetched_at: DateTime<Utc>,
}

impl Quote {
    /// Build a quote; `open` must be non-zero for the change to be meaningful
    pub fn new(last: f64, open: f64) -> Self {
        Self {
            last,
            open,
            percent_change: (last - open) / open * 100.0,
            fetched_at: Utc::now(),
        }
    }

    /// Fetch time for logs, e.g. `10:15:02 UTC`
    pub fn as_of(&self) -> String {
        self.fetched_at.format("%H:%M:%S UTC").to_string()
    }

    pub fn direction(&self) -> Direction {
        Direction::of(self.percent_change)
    }

    /// Whether the move from the open has reached the alert threshold
    pub fn crosses_threshold(&self) -> bool {
        self.percent_change.abs() >= ALERT_THRESHOLD_PCT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_percent_change_formula() {
        let quote = Quote::new(2750.5, 2800.0);
        let expected = (2750.5 - 2800.0) / 2800.0 * 100.0;
        assert_eq!(quote.percent_change, expected);
        assert_eq!(quote.direction(), Direction::Down);
    }

    #[test]
    fn test_index_up_one_percent() {
        let quote = Quote::new(3030.0, 3000.0);
        assert!((quote.percent_change - 1.0).abs() < 1e-9);
        assert_eq!(quote.direction(), Direction::Up);
        assert!(quote.crosses_threshold());
    }

    #[test]
    fn test_currency_down_one_percent() {
        let quote = Quote::new(99.0, 100.0);
        assert!((quote.percent_change + 1.0).abs() < 1e-9);
        assert_eq!(quote.direction(), Direction::Down);
        assert_eq!(quote.direction().arrow(), "🔻");
        assert!(quote.crosses_threshold());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let quote = Quote {
            last: 0.0,
            open: 0.0,
            percent_change: ALERT_THRESHOLD_PCT,
            fetched_at: Utc::now(),
        };
        assert!(quote.crosses_threshold());

        let below = Quote {
            percent_change: 0.99,
            ..quote.clone()
        };
        assert!(!below.crosses_threshold());

        let negative = Quote {
            percent_change: -ALERT_THRESHOLD_PCT,
            ..quote
        };
        assert!(negative.crosses_threshold());
    }

    #[test]
    fn test_fetch_time_stamped_and_rendered() {
        let before = Utc::now();
        let quote = Quote::new(3030.0, 3000.0);
        assert!(quote.fetched_at >= before && quote.fetched_at <= Utc::now());

        let fixed = Quote {
            fetched_at: Utc.with_ymd_and_hms(2025, 3, 14, 10, 15, 2).unwrap(),
            ..quote
        };
        assert_eq!(fixed.as_of(), "10:15:02 UTC");
    }

    #[test]
    fn test_zero_change_reads_as_down() {
        let quote = Quote::new(100.0, 100.0);
        assert_eq!(quote.percent_change, 0.0);
        assert_eq!(quote.direction(), Direction::Down);
        assert!(!quote.crosses_threshold());
    }
}
