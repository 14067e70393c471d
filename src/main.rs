use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use menu_rs::repositories::InMemoryMenuRepository;
use menu_rs::services::MenuService;
use menu_rs::{api_router, Config, MenuHandlerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting menu-rs service v{}", env!("CARGO_PKG_VERSION"));

    let app = create_app();

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app() -> Router {
    let repository = Arc::new(InMemoryMenuRepository::new());
    let menu_service = Arc::new(MenuService::new(repository));
    let state = MenuHandlerState { menu_service };

    api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menu_rs=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
