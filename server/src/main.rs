mod config;
mod routes;

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "invalid server configuration");
    })?;
    let addr = config.socket_addr();

    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, site_root = config.site_root(), output_name = config.output_name(), "hoops-mania listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
