use anyhow::Result;
use tracing::{info, warn};

use hotel_dashboard_gate::{config::Settings, routes::build_router, state::AppState, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    telemetry::init_telemetry();
    telemetry::install_panic_hook();

    info!("🚀 Starting Hotel Dashboard server...");

    let settings = Settings::load()?;
    if settings.session.uses_default_secret() {
        warn!("SESSION_SECRET not set, using the insecure development default");
    }
    info!(
        "✅ Configuration loaded (public dir: {}, secure cookies: {})",
        settings.static_files.public_dir.display(),
        settings.session.secure
    );

    let addr = settings.bind_addr()?;
    let app = build_router(AppState::new(settings));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🎯 Hotel Dashboard server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}
