use fact_of_the_day::{load_store, router, AppState, Config, FactStore};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let catalog = config.catalog();

    let facts = catalog.fetch_all_mixed().await.and_then(FactStore::new);
    match &facts {
        Ok(store) => info!(count = store.len(), "facts loaded"),
        Err(err) => error!("failed to load facts: {err}"),
    }

    let store = load_store(&config.state_path).await;
    let state = AppState::new(catalog, facts, config.state_path.clone(), store);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
