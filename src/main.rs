use anyhow::Context;
use dotenvy::dotenv;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use activity_signup::config::ServerConfig;
use activity_signup::web::{self, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Config + catalog
    let config = ServerConfig::from_env()?;
    let catalog = config
        .load_catalog()
        .context("loading activity catalog")?;

    // 3. In-memory directory
    let state = AppState::bootstrap(&catalog, config.capacity)
        .await
        .context("seeding activity directory")?;
    debug!(names = ?catalog.names().collect::<Vec<_>>(), "catalog loaded");
    info!(
        activities = catalog.len(),
        capacity = ?config.capacity,
        "activity directory ready"
    );

    let app = web::build_router(state, &config.static_dir);

    // 4. Serve, falling back to the next port when the configured one is taken
    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_bind_addr()
                .with_context(|| format!("cannot bind {}: {}", addr, e))?;
            warn!(%addr, error = %e, %fallback, "bind failed, trying fallback");
            tokio::net::TcpListener::bind(&fallback)
                .await
                .with_context(|| format!("cannot bind fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("listening on http://{}", bound_addr);
    info!("open http://{}/ to browse activities", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
