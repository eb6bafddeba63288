use userbook::bootstrap;
use userbook::config::Config;
use userbook::infrastructure::http::router::build_router;
use userbook::infrastructure::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    observability::init(&config)?;
    tracing::info!("Configuration loaded");

    // Build application state
    let state = bootstrap::build_app_state(&config);

    // Build router
    let app = build_router(state);

    // Start server
    let addr = config.server_address();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
