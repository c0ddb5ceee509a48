// File: services/connectify_backend/src/main.rs
use connectify_common::{logging, ConnectifyError, Context};
use connectify_config::load_config;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Backend stopped: {}", err);
            eprintln!("Backend stopped: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ConnectifyError> {
    let config = Arc::new(load_config().context("Failed to load config")?);
    logging::init_with_level(logging::parse_level(config.log_level.as_deref()));

    let app = connectify_backend::app(config.clone()).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")
}
