pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use tokio::net::TcpListener;

use shared::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let addr = config.socket_addr()?;

    let state = AppState::in_memory();
    let app = routes::configure_routes(state, &config.cors);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server is running on: http://{}", addr);
    tracing::info!("Available endpoints:");
    tracing::info!("GET    /health");
    tracing::info!("GET    /api/v1/users");
    tracing::info!("POST   /api/v1/users");
    tracing::info!("GET    /api/v1/users/:id");
    tracing::info!("PUT    /api/v1/users/:id");
    tracing::info!("DELETE /api/v1/users/:id");
    tracing::info!("GET    /api/v1/users/:id/transactions");
    tracing::info!("POST   /api/v1/transactions");
    tracing::info!("GET    /api/v1/transactions/:id");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Ждём Ctrl-C или SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Server is shutting down...");
}
