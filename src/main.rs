use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing_subscriber::{fmt, EnvFilter};

use mergington::config::Config;
use mergington::database::ActivityRegistry;
use mergington::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env().context("invalid configuration")?;

    let registry = Arc::new(ActivityRegistry::seeded());
    tracing::info!(
        activities = registry.get_all().names().count(),
        "activity registry seeded"
    );

    let app = web::app(registry, &config.static_dir);

    let addr = config.socket_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_addr()
                .with_context(|| format!("could not bind {}: {}", addr, e))?;
            tracing::warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    tracing::info!(
        build = env!("MERGINGTON_BUILD_ID"),
        static_dir = %config.static_dir.display(),
        "listening on http://{}",
        bound_addr
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
