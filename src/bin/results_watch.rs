use std::io;
use std::process;

use cats_dogs_results::config::WatchConfig;
use cats_dogs_results::presenter::{HttpResultsSource, TerminalRenderer};
use cats_dogs_results::tasks::ResultsPoller;
use log::{error, info};
use tokio::sync::watch;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match WatchConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let source = HttpResultsSource::new(config.results_url);
    info!("Watching {}", source.url());

    let (stop, shutdown) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = stop.send(true);
            }
            Err(e) => {
                // Keep the sender alive so polling carries on
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    });

    let poller = ResultsPoller::new(source, TerminalRenderer::new(io::stdout()));
    poller.run(shutdown).await;
}
