//! Echona Engine - headless challenge session driver.
//!
//! Reads one command per line from stdin and prints the resulting view as JSON.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use echona_engine::api::{execute, Command};
use echona_engine::infrastructure::{
    clock::SystemClock, config::EngineConfig, persistence::SqliteProgressStore, ports::ClockPort,
};
use echona_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "echona_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Echona Engine");

    // Load configuration
    let config = EngineConfig::from_env()?;
    tracing::info!(
        db_path = %config.db_path,
        namespace = %config.namespace,
        points_policy = ?config.points_policy,
        "Configuration loaded"
    );

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let store = Arc::new(SqliteProgressStore::new(&config.db_path, clock.clone()).await?);
    let app = App::new(config, store, clock).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                let view = execute(&app.session, command).await;
                println!("{}", serde_json::to_string(&view)?);
            }
            Err(e) => tracing::warn!(error = %e, input = %line, "Ignoring command"),
        }
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
