pub mod api;
pub mod dashboards;
pub mod routes;
pub mod shared;
pub mod system;

use anyhow::Context;

use dashboards::d400_insurance_analytics::loader;
use system::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;

    // Таблица читается один раз; ошибка загрузки останавливает сервер
    let data_path = shared::config::get_data_path(&config);
    let table = match loader::load_table(&data_path, config.data.sheet.as_deref()) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Failed to load data from {}: {}", data_path.display(), e);
            return Err(e).with_context(|| format!("cannot load {}", data_path.display()));
        }
    };

    let state = AppState::new(table, config.dashboard.clone());
    let app = routes::configure_routes(state, &config.server.static_dir);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid server address {}:{}",
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
