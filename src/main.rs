//! # Main Entry Point
//!
//! Initializes the marketplace bot:
//! - Domain: Configuration, Types and the Market
//! - Infrastructure: Matrix
//! - Application: Router, Conversation State
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::application::router::CommandRouter;
use crate::application::state::BotState;
use crate::domain::config::AppConfig;
use crate::domain::traits::ChatProvider;
use crate::infrastructure::matrix::{MatrixService, SenderDirectory};
use crate::strings::logs;

#[derive(Debug, Parser)]
#[command(name = "bazaar", about = "Marketplace chat bot")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "data/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    let log_dir = Path::new(&config.logging.dir);
    if !log_dir.exists() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Clear previous session log
    let log_path = log_dir.join(&config.logging.file);
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, &config.logging.file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("{}", logs::STARTING);
    tracing::info!(
        "{}",
        logs::config_loaded(&cli.config.display().to_string(), &config.services.matrix.username)
    );

    let password = config.services.matrix.resolve_password()?;

    // 3. Application State
    let state = BotState::shared();
    let router = Arc::new(CommandRouter::new(config.clone(), state));
    let senders = Arc::new(SenderDirectory::new());

    // 4. Matrix Setup
    let client = Client::builder()
        .homeserver_url(&config.services.matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(&config.services.matrix.username, &password)
        .send()
        .await?;

    tracing::info!("{}", logs::logged_in(&config.services.matrix.username));

    if let Some(name) = &config.services.matrix.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    // 5. Event Loop
    let start_time = std::time::SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();
        let senders = senders.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let ts = ev.origin_server_ts();
            let event_time =
                std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            let MessageType::Text(text_content) = &original_msg.content.msgtype else {
                return;
            };
            if original_msg.sender == room.own_user_id() {
                return;
            }

            let body = &text_content.body;
            tracing::info!("Received message from {}: \n{}", original_msg.sender, body);

            let sender = senders.resolve(original_msg.sender.as_str()).await;
            let chat = MatrixService::new(room);

            if let Err(e) = router.route(&chat, sender, body).await {
                tracing::error!("{}", logs::send_failed(&chat.room_id(), &e.to_string()));
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            let _ = room.join().await;
        }
    });

    // 6. Sync forever
    tracing::info!("{}", logs::SYNC_LOOP_START);
    if let Err(e) = client.sync(SyncSettings::default()).await {
        tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
        return Err(e.into());
    }

    Ok(())
}
