//! Startup configuration
//!
//! The listen address, certificate/key pair, engine endpoint, and admin
//! credential digest are all supplied externally; nothing here is
//! derived at runtime.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "admin", about = "Administrative API for the matching engine")]
pub struct Config {
    /// Address the TLS listener binds.
    #[arg(long, env = "ADMIN_LISTEN", default_value = "127.0.0.1:6542")]
    pub listen: SocketAddr,

    /// Base URL of the engine's internal admin API.
    #[arg(long, env = "ADMIN_ENGINE_URL", default_value = "http://127.0.0.1:7232")]
    pub engine_url: String,

    /// Path to the PEM-encoded TLS certificate.
    #[arg(long, env = "ADMIN_TLS_CERT")]
    pub tls_cert: PathBuf,

    /// Path to the PEM-encoded TLS key.
    #[arg(long, env = "ADMIN_TLS_KEY")]
    pub tls_key: PathBuf,

    /// Hex-encoded SHA-256 digest of the admin password.
    #[arg(long, env = "ADMIN_PASS_SHA256")]
    pub admin_pass_sha256: String,
}

impl Config {
    /// Decode the configured credential digest.
    pub fn auth_digest(&self) -> anyhow::Result<[u8; 32]> {
        let bytes = hex::decode(self.admin_pass_sha256.trim())
            .context("admin password digest is not valid hex")?;
        bytes.as_slice().try_into().map_err(|_| {
            anyhow::anyhow!(
                "admin password digest must be 32 bytes, got {}",
                bytes.len()
            )
        })
    }
}
