use sg_server::{
    AppState, ShutdownCoordinator, build_router, error::ServerError, logger,
    spawn_admin_bootstrap,
};
use sg_store::UserStore;

use std::error::Error;
use std::net::SocketAddr;

use log::{error, info};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = sg_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = sg_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting sg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let metrics_handle =
        PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| ServerError::Metrics {
                message: format!("Failed to install Prometheus recorder: {e}"),
            })?;

    let store = UserStore::new();
    let shutdown = ShutdownCoordinator::new();

    let app_state = AppState::from_config(&config, store.clone(), metrics_handle, shutdown.clone());

    spawn_admin_bootstrap(store, config.bootstrap.clone(), app_state.metrics.clone());

    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    let mut shutdown_guard = shutdown.subscribe_guard();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
        .with_graceful_shutdown(async move {
            shutdown_guard.wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
