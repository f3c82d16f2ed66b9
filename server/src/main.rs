mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    config::report_env_file(dotenvy::dotenv());

    if let Err(err) = run().await {
        tracing::error!(error = %err, "admin dashboard host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|e| e.to_string())?;
    let app = routes::leptos_app(&config)?;
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind {addr}: {e}"))?;

    tracing::info!(%addr, "admin dashboard listening");
    axum::serve(listener, app).await.map_err(|e| format!("server failed: {e}"))
}
