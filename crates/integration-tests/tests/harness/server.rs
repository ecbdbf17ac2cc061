//! Running faultline instance for end-to-end tests

use std::net::SocketAddr;

use faultline_config::Config;
use faultline_responder::{ErrorResponder, MemoryLog};
use faultline_server::Server;
use tokio_util::sync::CancellationToken;

use super::routes;

/// Server on an ephemeral port, stopped on drop
///
/// Responded errors go to an in-memory log instead of `tracing`, so tests
/// can assert on category, severity and the detail kept out of the body.
pub struct TestServer {
    addr: SocketAddr,
    stop: CancellationToken,
    client: reqwest::Client,
    log: MemoryLog,
}

impl TestServer {
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let log = MemoryLog::new();
        let router =
            Server::with_responder(&config, routes::router(), ErrorResponder::new(log.clone())).into_router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let stop = CancellationToken::new();
        let stopped = stop.clone().cancelled_owned();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).with_graceful_shutdown(stopped).await;
        });

        Ok(Self {
            addr,
            stop,
            client: reqwest::Client::new(),
            log,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Errors recorded by the responder so far
    pub fn log(&self) -> &MemoryLog {
        &self.log
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.stop.cancel();
    }
}
