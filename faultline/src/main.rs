#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::Args;
use clap::Parser;
use faultline_config::Config;
use faultline_server::Server;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load(&args.config)?;
    faultline_telemetry::init(&config.telemetry, args.log.as_deref())?;

    tracing::info!(config_path = %args.config.display(), "faultline starting");

    // Only health and the error stack; embedding crates bring their own routes
    let server = match args.listen {
        Some(listen) => Server::new(&config, axum::Router::new()).with_listen_address(listen),
        None => Server::new(&config, axum::Router::new()),
    };

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_signal(shutdown.clone()));

    server.serve(shutdown).await?;

    tracing::info!("faultline stopped");
    Ok(())
}

/// Cancel `token` on `SIGINT`, or `SIGTERM` on unix
///
/// A handler that fails to install is logged and never fires; the other
/// one still works.
async fn cancel_on_signal(token: CancellationToken) {
    let interrupt = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGINT");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "SIGTERM"
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };

    tracing::info!(signal = received, "shutting down");
    token.cancel();
}
