//! Chat command replies

use crate::domain::{Instrument, Quote};
use crate::infrastructure::client::iss::MarketDataSource;
use teloxide::utils::command::BotCommands;
use tracing::warn;

/// Commands understood by the bot; the user-facing list is [`HELP_TEXT`]
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    Start,
    Index,
    Usd,
}

pub const HELP_TEXT: &str = "📈 <b>Бот мониторинга Мосбиржи</b>\n\n\
Доступные команды:\n\
• /index — Индекс Мосбиржи (IMOEX)\n\
• /usd — Курс USD/RUB\n\
Бот также отправит уведомление, если движение превысит 1%.";

pub fn format_quote(instrument: Instrument, quote: &Quote) -> String {
    format!(
        "{}\n{}: <b>{:.2}</b>\nЦена открытия: {:.2}\nИзменение: {} <b>{:.2}%</b>",
        instrument.title(),
        instrument.last_label(),
        quote.last,
        quote.open,
        quote.direction().arrow(),
        quote.percent_change
    )
}

pub fn format_fetch_error(instrument: Instrument) -> String {
    format!("⚠️ Не удалось получить данные {} с Мосбиржи. Попробуйте позже.", instrument)
}

/// Build the reply text for a command
pub async fn reply_for(command: &Command, source: &dyn MarketDataSource) -> String {
    let instrument = match command {
        Command::Start => return HELP_TEXT.to_string(),
        Command::Index => Instrument::Index,
        Command::Usd => Instrument::UsdRub,
    };

    match source.fetch_quote(instrument).await {
        Ok(quote) => format_quote(instrument, &quote),
        Err(e) => {
            warn!("Command {:?}: failed to fetch {}: {}", command, instrument, e);
            format_fetch_error(instrument)
        }
    }
}
