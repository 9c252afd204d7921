use std::sync::Arc;

use clap::Parser;

use admin::config::Config;
use admin::core::EngineClient;
use admin::router::create_router;
use admin::state::AppState;
use admin::tls::TlsListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    let auth_digest = config.auth_digest()?;

    let core = Arc::new(EngineClient::new(config.engine_url.clone()));
    let state = AppState::new(core, auth_digest);
    let app = create_router(state);

    let listener = TlsListener::bind(config.listen, &config.tls_cert, &config.tls_key).await?;
    tracing::info!(addr = %config.listen, engine = %config.engine_url, "admin API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
