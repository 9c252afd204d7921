//! Shared request-handler state

use std::sync::Arc;

use crate::core::MarketCore;

/// Hand-off to every request handler.
///
/// The digest is read-only after startup and the core handle must be
/// safe for concurrent callers, so the admin layer itself holds no
/// cross-request mutable state.
#[derive(Clone)]
pub struct AppState {
    pub core: Arc<dyn MarketCore>,
    pub auth_digest: [u8; 32],
}

impl AppState {
    pub fn new(core: Arc<dyn MarketCore>, auth_digest: [u8; 32]) -> Self {
        Self { core, auth_digest }
    }
}
