// src/bin/api_server.rs

use flatfile_blog_api::infra::{config, logging};
use flatfile_blog_api::transport;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_tracing();

    // --- Collection files ---
    let users_file = config::users_file();
    let blogs_file = config::blogs_file();
    info!(
        users = %users_file.display(),
        blogs = %blogs_file.display(),
        "using collection files"
    );
    let app_state = transport::http::AppState::new(users_file, blogs_file);

    // --- API Server Initialization ---
    let addr = config::bind_addr()?;
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let swagger = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi());
    let app = transport::http::create_router(app_state)
        .merge(swagger)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on http://{}", listener.local_addr()?);
    info!("Swagger UI available at http://{}/swagger-ui", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received (Ctrl+C)...");
}
