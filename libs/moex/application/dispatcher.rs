//! Inbound command dispatch over Telegram long polling

use super::responder::{reply_for, Command};
use crate::infrastructure::client::iss::MarketDataSource;
use crate::infrastructure::client::telegram::Notifier;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{info, warn};

/// Serve chat commands until Ctrl+C
///
/// Replies go through the same [`Notifier`] the monitor uses.
pub async fn run_dispatcher(
    bot: Bot,
    source: Arc<dyn MarketDataSource>,
    notifier: Arc<dyn Notifier>,
) {
    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(handle_command);

    info!("Command dispatcher started");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![source, notifier])
        .default_handler(|_| async {})
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Command dispatcher stopped");
}

async fn handle_command(
    msg: Message,
    cmd: Command,
    source: Arc<dyn MarketDataSource>,
    notifier: Arc<dyn Notifier>,
) -> ResponseResult<()> {
    info!("Command {:?} from chat {}", cmd, msg.chat.id.0);

    let text = reply_for(&cmd, source.as_ref()).await;
    if let Err(e) = notifier.send_text(msg.chat.id.0, &text).await {
        warn!("Failed to reply to chat {}: {}", msg.chat.id.0, e);
    }
    Ok(())
}
