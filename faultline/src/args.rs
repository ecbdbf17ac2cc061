use std::path::PathBuf;

use clap::Parser;

/// faultline error-responding HTTP server
#[derive(Debug, Parser)]
#[command(name = "faultline", about = "HTTP server with centralized error responses")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "faultline.toml", env = "FAULTLINE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "FAULTLINE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Override the log filter (e.g. `debug,faultline::security=warn`)
    #[arg(long, env = "FAULTLINE_LOG")]
    pub log: Option<String>,
}
