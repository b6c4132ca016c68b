use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use salon_site::config::Config;
use salon_site::content::ContentStore;
use salon_site::routes::build_router;
use salon_site::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("salon_site={},tower_http={}", &config.rust_log, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    // Content is loaded once; an invalid file stops startup
    let mut content = match &config.content_file {
        Some(path) => ContentStore::from_file(path)
            .with_context(|| format!("Failed to load content file {}", path.display()))?,
        None => {
            info!("CONTENT_FILE not set, serving built-in content");
            ContentStore::builtin()
        }
    };
    if let Some(site_name) = &config.site_name {
        content = content.with_site_name(site_name.clone());
    }

    let state = AppState::new(config.clone(), Arc::new(content));

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
