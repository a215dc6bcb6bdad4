//! Runtime configuration, read from flags or the environment (`.env` is
//! loaded first by the binary).

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

use crate::infra::tsa::DEFAULT_TSA_BASE_URL;

#[derive(Debug, Parser)]
#[command(name = "tsa_wait_proxy")]
#[command(about = "Summarises TSA checkpoint wait times per airport", long_about = None)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Upstream TSA wait-time endpoint
    #[arg(long, env = "TSA_BASE_URL", default_value = DEFAULT_TSA_BASE_URL)]
    pub tsa_base_url: String,

    /// Seconds to wait for the upstream service before giving up
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 8)]
    pub upstream_timeout_secs: u64,

    /// JSON log file; rotated daily
    #[arg(long, env = "LOG_FILE_PATH", default_value = "logs/tsa_wait_proxy.log")]
    pub log_file_path: String,
}

impl Config {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
