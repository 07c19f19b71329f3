use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use pixel_tracker_api::services::{PgViewStore, SmtpMailer};
use pixel_tracker_api::{database, router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Load configuration
    let config = Arc::new(Config::from_env()?);

    init_tracing(config.log_json);
    info!("Starting pixel tracker...");
    info!("Configuration loaded (base url {})", config.base_url);

    // Initialize database pool and schema
    let db_pool = database::new_pool(&config.database_url).await?;
    let store = Arc::new(PgViewStore::new(db_pool));
    info!("Database connection pool created");

    let mailer = SmtpMailer::new(
        &config.smtp_host,
        config.email_user.clone(),
        config.email_pass.clone(),
    )?;
    info!("SMTP transport configured for {}", config.smtp_host);

    let app_state = AppState {
        config: config.clone(),
        store: store.clone(),
        mailer: Arc::new(mailer),
    };

    let app = router(app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on port {}", config.port);

    // Peer addresses feed the `ip` field of view events
    let result = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await;

    if let Err(e) = result {
        error!("Server error: {}", e);
    }

    store.close().await;
    info!("Database pool closed");

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pixel_tracker_api=debug,tower_http=debug".into());

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, shutting down gracefully...");
}
