use std::process;
use std::sync::Arc;

use cats_dogs_results::config::Config;
use cats_dogs_results::db::Database;
use cats_dogs_results::handlers::{self, AppState};
use log::{error, info, warn};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    // The pool connects lazily; a database that is still starting only
    // costs 500s from /results until it answers
    let database = Arc::new(Database::new(&config.store));
    let bootstrap = Arc::clone(&database);
    tokio::spawn(async move {
        if let Err(e) = bootstrap.ensure_schema().await {
            warn!("PostgreSQL not ready at startup, will retry on request: {}", e);
        }
    });

    let state = AppState {
        store: database.clone(),
    };
    let app = handlers::router(state, &config.static_dir);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", address, e);
            process::exit(1);
        }
    };
    info!("Results frontend listening on {}", address);

    if let Err(why) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {:?}", why);
    }

    database.pool().close().await;
    info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
