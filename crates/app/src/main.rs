use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    server::telemetry::init_tracing();

    server::config::load_feature_flags();
    let flags = server::config::feature_flags();

    if flags.telemetry {
        server::telemetry::init_telemetry();
    }
    server::health::record_start_time();

    let settings = server::config::Settings::from_env();
    let state = server::state::AppState::from_settings(&settings);
    let router = server::openapi::app_router(state, flags);

    let listener = match TcpListener::bind(&settings.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(bind_addr = %settings.bind_addr, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    tracing::info!(
        bind_addr = %settings.bind_addr,
        api_base_url = %settings.api_base_url,
        "Staffdesk listening"
    );

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server exited with error");
    }

    server::telemetry::shutdown_telemetry();
}

/// Resolve on Ctrl-C so in-flight searches can finish.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
