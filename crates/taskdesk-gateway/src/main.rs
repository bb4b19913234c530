use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use taskdesk_core::TaskdeskConfig;
use taskdesk_store::TaskStore;
use tracing::info;

mod app;
mod http;

/// Personal task scheduler with a recurrence-date engine.
#[derive(Debug, Parser)]
#[command(name = "taskdesk-gateway", version)]
struct Cli {
    /// Path to the config file (default: ./taskdesk.toml).
    #[arg(long)]
    config: Option<String>,
    /// Override server.port from the config.
    #[arg(long)]
    port: Option<u16>,
    /// Override database.path from the config.
    #[arg(long)]
    db: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdesk_gateway=info,tower_http=debug".into()),
        )
        .init();

    let cli = Cli::parse();

    // load config: --config flag > TASKDESK_CONFIG env > ./taskdesk.toml
    let config_path = cli.config.or_else(|| std::env::var("TASKDESK_CONFIG").ok());
    let mut config = TaskdeskConfig::load(config_path.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed ({}), using defaults", e);
        TaskdeskConfig::default()
    });
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(db_path) = cli.db {
        config.database.path = db_path;
    }

    ensure_parent_dir(&config.database.path);
    info!(path = %config.database.path, "opening SQLite database");

    let db = rusqlite::Connection::open(&config.database.path)?;
    db.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    // schema init is idempotent; the store takes ownership of the connection
    let tasks = TaskStore::new(db)?;
    info!("database ready");

    let bind = config.server.bind.clone();
    let port = config.server.port;

    let state = Arc::new(app::AppState::new(config, tasks));
    let router = app::build_router(state);

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!("taskdesk gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

/// Ensure the parent directory for a file path exists.
fn ensure_parent_dir(path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
}
