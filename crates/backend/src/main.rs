pub mod api;
pub mod dashboards;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod system;

use anyhow::Context;
use std::sync::Arc;

use shared::data::{CsvDatasetProvider, DatasetProvider};
use shared::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let dataset_path = shared::config::get_dataset_path(&config);

    // Датасет читается один раз; ошибка загрузки фатальна
    let provider = Arc::new(CsvDatasetProvider::new(&dataset_path));
    let dataset = provider
        .dataset()
        .with_context(|| format!("Failed to load dataset {}", provider.path().display()))?;
    tracing::info!(
        "Dataset ready: {} rows, {} products, {} countries",
        dataset.len(),
        dataset.product_options().len(),
        dataset.country_options().len()
    );
    if dataset.is_empty() {
        tracing::warn!(
            "Dataset {} has no rows, dashboard will show empty results",
            provider.path().display()
        );
    }

    let state = Arc::new(AppState::new(provider));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let static_dir = shared::config::get_static_dir(&config);
    let app = routes::configure_routes(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid server address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
