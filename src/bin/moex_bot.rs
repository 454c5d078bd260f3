//! MOEX monitor bot
//!
//! Answers /start, /index and /usd in Telegram and alerts the owner once per
//! instrument when IMOEX or USD/RUB moves 1% from the session open.
//!
//! Usage:
//!   TELEGRAM_TOKEN=... cargo run --bin moex_bot

use anyhow::Context;
use moex::application::{run_dispatcher, MarketMonitor};
use moex::infrastructure::{init_tracing, BotConfig, IssClient, MarketDataSource, Notifier, TelegramNotifier};
use moex_monitor_bot::bin_common::{load_env_file, BinaryRunner, EnvFile, RunConfig};
use std::sync::Arc;
use teloxide::Bot;
use tracing::{error, info};

struct MoexBot {
    run_config: RunConfig,
    bot_config: BotConfig,
}

impl BinaryRunner for MoexBot {
    async fn run(&mut self) -> anyhow::Result<()> {
        let source: Arc<dyn MarketDataSource> = Arc::new(
            IssClient::with_base_url(&self.bot_config.iss_base_url)
                .context("Failed to build ISS client")?,
        );

        let bot = Bot::new(&self.bot_config.telegram_token);
        let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(bot.clone()));

        let monitor = MarketMonitor::new(
            Arc::clone(&source),
            Arc::clone(&notifier),
            self.bot_config.owner_chat_id,
            self.run_config.monitor_settings(),
        );
        let monitor_task = tokio::spawn(monitor.run());
        info!("✅ Market monitor spawned (alerts to chat {})", self.bot_config.owner_chat_id);

        run_dispatcher(bot, source, notifier).await;

        if monitor_task.is_finished() {
            if let Err(e) = monitor_task.await {
                error!("Market monitor task ended unexpectedly: {}", e);
            }
        } else {
            monitor_task.abort();
        }
        Ok(())
    }

    fn config(&self) -> &RunConfig {
        &self.run_config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_path = load_env_file(EnvFile::Default);
    init_tracing();

    if let Some(path) = env_path {
        info!("📝 Environment loaded from {}", path.display());
    }

    let bot_config = BotConfig::from_env()
        .context("TELEGRAM_TOKEN must be set in the environment or .env")?;

    let mut app = MoexBot {
        run_config: RunConfig::new("MOEX Monitor Bot"),
        bot_config,
    };
    app.execute().await
}
