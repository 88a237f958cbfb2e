use std::sync::{Arc, Mutex};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use method_guesser::env_config;
use method_guesser::server::create_router;
use method_guesser::storage::{FileStore, StatsStore};
use method_guesser::QuizSession;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = env_config::init_base_path() {
        tracing::error!(error = %e, "Failed to change to base path");
        std::process::exit(1);
    }
    let port = env_config::server_port();
    let stats_path = env_config::stats_path();
    let options = env_config::session_options();
    tracing::info!(
        stats_path = %stats_path.display(),
        max_life = options.max_life,
        life_policy = ?options.life_policy,
        "Starting method guesser server"
    );

    let store: Box<dyn StatsStore + Send> = Box::new(FileStore::new(stats_path));
    let session = match QuizSession::new(store, options) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build session");
            std::process::exit(1);
        }
    };
    tracing::info!(
        operations = session.catalog().operation_count(),
        "Catalog loaded"
    );

    let app = create_router(Arc::new(Mutex::new(session)));

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(port, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!(port, "Server is running. Press Ctrl+C to stop.");
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    tracing::info!("Stopping server");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
