//! TLS listener
//!
//! The admin surface is TLS-only. Certificate material comes from the
//! configured PEM files; this wraps a TCP listener with a native-tls
//! acceptor so `axum::serve` can drive it directly.

use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use axum::serve::Listener;
use tokio::net::{TcpListener, TcpStream};
use tokio_native_tls::{TlsAcceptor, TlsStream};

pub struct TlsListener {
    inner: TcpListener,
    acceptor: TlsAcceptor,
}

impl TlsListener {
    /// Bind `addr` and serve TLS with the PEM-encoded certificate/key
    /// pair at the given paths.
    pub async fn bind(addr: SocketAddr, cert: &Path, key: &Path) -> anyhow::Result<Self> {
        let cert_pem = tokio::fs::read(cert)
            .await
            .with_context(|| format!("reading TLS certificate {}", cert.display()))?;
        let key_pem = tokio::fs::read(key)
            .await
            .with_context(|| format!("reading TLS key {}", key.display()))?;
        let identity = native_tls::Identity::from_pkcs8(&cert_pem, &key_pem)
            .context("parsing TLS identity")?;
        let acceptor =
            native_tls::TlsAcceptor::new(identity).context("building TLS acceptor")?;
        let inner = TcpListener::bind(addr)
            .await
            .with_context(|| format!("binding {addr}"))?;
        Ok(Self {
            inner,
            acceptor: acceptor.into(),
        })
    }
}

impl Listener for TlsListener {
    type Io = TlsStream<TcpStream>;
    type Addr = SocketAddr;

    async fn accept(&mut self) -> (Self::Io, Self::Addr) {
        loop {
            let (stream, addr) = match self.inner.accept().await {
                Ok(conn) => conn,
                Err(err) => {
                    tracing::warn!(%err, "accept failed");
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    continue;
                }
            };
            match self.acceptor.accept(stream).await {
                Ok(tls) => return (tls, addr),
                Err(err) => tracing::debug!(%err, peer = %addr, "TLS handshake failed"),
            }
        }
    }

    fn local_addr(&self) -> io::Result<Self::Addr> {
        self.inner.local_addr()
    }
}
