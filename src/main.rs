//! Server bootstrap: config from env, store construction, schema DDL, serve
//! with graceful shutdown and explicit store teardown.

use axum::Router;
use tabletop_api::{
    api_routes, common_routes, ensure_database_exists, AppConfig, AppState, Store,
};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tabletop_api=info".parse()?))
        .init();

    let config = AppConfig::from_env();
    ensure_database_exists(&config.database_url).await?;
    let store = Store::connect(&config).await?;
    store.ensure_schema().await?;

    let state = AppState {
        store: store.clone(),
    };
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler");
    }
}
