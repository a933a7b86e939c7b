//! Stock tracker entry point.

use std::io::Write;
use std::process::ExitCode;

use shell::config::Config;
use shell::{Outcome, Shell};
use stock_store::SqliteStockStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, shutting down");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}

fn prompt() {
    print!("> ");
    if let Err(err) = std::io::stdout().flush() {
        tracing::warn!(error = %err, "failed to flush prompt");
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Load configuration
    let config = Config::from_env();

    // 2. Initialize tracing (stderr, so replies on stdout stay clean)
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 3. Open the database
    let store = match SqliteStockStore::connect(&config.database_url).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(error = %err, url = %config.database_url, "failed to open stock database");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(url = %config.database_url, "stock tracker started");

    // 4. Read commands until quit, EOF or a signal
    let shell = Shell::new(store.clone(), &config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    println!("Stock tracker. Type 'help' for commands.");
    let status = loop {
        prompt();
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => match shell.execute(&line).await {
                    Outcome::Reply(text) => println!("{text}"),
                    Outcome::Silent => {}
                    Outcome::Quit => break ExitCode::SUCCESS,
                },
                Ok(None) => break ExitCode::SUCCESS,
                Err(err) => {
                    tracing::error!(error = %err, "failed to read input");
                    break ExitCode::FAILURE;
                }
            },
            () = &mut shutdown => break ExitCode::SUCCESS,
        }
    };

    store.pool().close().await;
    tracing::info!("stock tracker stopped");
    status
}
