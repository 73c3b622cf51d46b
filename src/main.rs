use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use contact_form::config::{Config, StoreBackend};
use contact_form::store::{MemoryStore, PgStore, SubmissionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Load config
    let config = Config::from_env()?;

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!("Starting contact form service");

    // Create the process-wide store client
    let store: Arc<dyn SubmissionStore> = match config.store {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, submissions will not survive a restart");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or("Missing required environment variable: DATABASE_URL")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect_lazy(database_url)?;

            let store = PgStore::new(pool, &config.table_name)?;
            // No migrations: the table name is runtime configuration
            store.ensure_table().await?;
            tracing::info!("Using table {}", store.table_name());
            Arc::new(store)
        }
    };

    let addr = SocketAddr::new(config.host, config.port);
    let app = contact_form::build_app(store, &config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
