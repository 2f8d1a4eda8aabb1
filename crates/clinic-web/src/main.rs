use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use clinic_web::{load_config, router, AppState};

/// Used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "clinic_web=info,clinic_core=info,tower_http=info";

#[derive(Parser)]
#[command(name = "clinic-web")]
#[command(about = "Clinic records web server")]
struct Cli {
    /// Config file (TOML). Defaults to ./clinic.toml when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, e.g. 127.0.0.1:8080
    #[arg(long)]
    bind: Option<String>,

    /// SQLite database file
    #[arg(long)]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(database) = cli.database {
        config.database_path = database;
    }

    let pool = clinic_core::open_pool(&config.database_path, config.pool_size).with_context(|| {
        format!("failed to open database {}", config.database_path.display())
    })?;
    let state = AppState::new(pool).context("failed to load templates")?;

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(
        addr = %config.bind_addr,
        database = %config.database_path.display(),
        "clinic records listening"
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}
