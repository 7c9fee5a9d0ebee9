use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordcloud::{
    build_router,
    session::start_cleanup_task,
    AppState, Config, InMemorySessionRepository,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordcloud=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting word cloud server");

    let config = Config::from_env();
    let session_repository = Arc::new(InMemorySessionRepository::new());

    let cleanup = start_cleanup_task(session_repository.clone(), config.cleanup_config());

    let app = build_router(AppState::with_repository(session_repository));

    let address = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %address, error = %e, "Failed to bind listener");
            cleanup.shutdown().await;
            std::process::exit(1);
        }
    };

    info!(
        teacher = %format!("http://localhost:{}", config.port),
        student = %format!("http://localhost:{}/join", config.port),
        "Server running on {}",
        address
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
    }

    cleanup.shutdown().await;
    info!("Word cloud server stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
