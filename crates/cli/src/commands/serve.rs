use anyhow::Result;
use bankdash_http::{AppState, create_router};
use std::sync::Arc;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let state = AppState::from_env();
    if state.auth.secure_cookies {
        tracing::info!("Production mode: session cookie marked Secure");
    }

    let router = create_router(Arc::new(state));
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
