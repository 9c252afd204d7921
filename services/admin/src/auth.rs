//! Operator credential gate
//!
//! Mutating routes are wrapped in [`require_auth`]. The configured
//! credential is a SHA-256 digest of the admin password, never the
//! password itself, and comparison is constant-time in the digest
//! length. The username on the Basic header is accepted and ignored.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

/// Middleware for mutating routes: admits the request iff the Basic
/// password digests to the configured credential. Denials carry the
/// standard `WWW-Authenticate` challenge via [`AppError::Unauthorized`].
pub async fn require_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let password = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(basic_password);
    match password {
        Some(pass) if verify_secret(&pass, &state.auth_digest) => Ok(next.run(req).await),
        _ => Err(AppError::Unauthorized),
    }
}

/// Password portion of a Basic authorization header value, if any.
fn basic_password(header: &str) -> Option<String> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let creds = String::from_utf8(decoded).ok()?;
    let (_user, pass) = creds.split_once(':')?;
    Some(pass.to_string())
}

/// Constant-time comparison of the secret's digest against the
/// configured digest. An empty secret never matches, even if the
/// configured digest happens to be the digest of the empty string.
pub fn verify_secret(secret: &str, digest: &[u8; 32]) -> bool {
    if secret.is_empty() {
        return false;
    }
    let provided = Sha256::digest(secret.as_bytes());
    provided.as_slice().ct_eq(digest).into()
}

/// SHA-256 digest of an admin password, in configuration form.
pub fn secret_digest(secret: &str) -> [u8; 32] {
    Sha256::digest(secret.as_bytes()).into()
}
