//! Monitored instruments

use std::fmt;

/// One of the two instruments the bot watches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    /// MOEX Russia Index, board SNDX
    Index,
    /// USD/RUB "tomorrow" settlement on the SELT currency market
    UsdRub,
}

impl Instrument {
    /// Both instruments, in the order the monitor checks them
    pub const ALL: [Instrument; 2] = [Instrument::Index, Instrument::UsdRub];

    /// Exchange ticker
    pub fn ticker(&self) -> &'static str {
        match self {
            Instrument::Index => "IMOEX",
            Instrument::UsdRub => "USD000UTSTOM",
        }
    }

    /// ISS endpoint path, relative to the API host
    pub fn iss_path(&self) -> &'static str {
        match self {
            Instrument::Index => "/iss/engines/stock/markets/index/boards/SNDX/securities/IMOEX.json",
            Instrument::UsdRub => "/iss/engines/currency/markets/selt/securities/USD000UTSTOM.json",
        }
    }

    /// Header line of a command reply (HTML)
    pub fn title(&self) -> &'static str {
        match self {
            Instrument::Index => "📊 <b>Индекс Мосбиржи (IMOEX)</b>",
            Instrument::UsdRub => "💵 <b>Курс USD/RUB</b>",
        }
    }

    /// Label of the current value line in a command reply
    pub fn last_label(&self) -> &'static str {
        match self {
            Instrument::Index => "Текущая цена",
            Instrument::UsdRub => "Текущий курс",
        }
    }

    /// Alert headline
    pub fn alert_headline(&self) -> &'static str {
        match self {
            Instrument::Index => "Движение индекса Мосбиржи!",
            Instrument::UsdRub => "Движение курса USD/RUB!",
        }
    }

    /// Subject of the alert sentence
    pub fn alert_subject(&self) -> &'static str {
        match self {
            Instrument::Index => "IMOEX",
            Instrument::UsdRub => "Доллар",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instrument::Index => write!(f, "IMOEX"),
            Instrument::UsdRub => write!(f, "USD/RUB"),
        }
    }
}
