//! Outbound Telegram messages

use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

pub type Result<T> = std::result::Result<T, NotifyError>;

/// Capability to deliver a formatted (HTML) text message to a chat
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_text(&self, recipient: i64, text: &str) -> Result<()>;
}

/// [`Notifier`] backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_text(&self, recipient: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(recipient), text)
            .parse_mode(ParseMode::Html)
            .await?;
        debug!("Sent {} bytes to chat {}", text.len(), recipient);
        Ok(())
    }
}
