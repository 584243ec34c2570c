use std::net::SocketAddr;

use tracing::{Level, info};

use widgets_api::config::AppConfig;
use widgets_api::database::init_db;
use widgets_api::service::WidgetService;
use widgets_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;

    let db = init_db(&config.database.url).await?;
    info!("Connected to database at {}", config.database.url);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let state = AppState {
        widgets: WidgetService::new(db),
        config,
    };

    let app = widgets_api::build_router(state);

    info!("Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
