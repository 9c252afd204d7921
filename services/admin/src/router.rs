//! Route table for the admin surface

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::handlers::{status, suspend};
use crate::state::AppState;

/// All admin routes. Status queries are open; mutating routes sit
/// behind the credential gate.
pub fn create_router(state: AppState) -> Router {
    let mutating = Router::new()
        .route("/market/{name}/suspend", get(suspend::suspend_market))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/ping", get(status::ping))
        .route("/markets", get(status::markets))
        .route("/market/{name}", get(status::market_info))
        .merge(mutating)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
