use anyhow::Result;
use clap::Parser;
use infrastructure::ServerConfig;
use infrastructure::database::connect;
use lims_server::{api, setup_app_state};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding default.toml and the RUN_MODE overlay
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// API port, overrides http.port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,lims_server=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv::dotenv().ok();
    let args = Args::parse();
    info!("🧪 LIMS Server Starting...");

    let config = ServerConfig::load(&args.config_dir)?;

    info!("Connecting to database...");
    let db = connect(&config.database).await?;
    info!("✅ Database ready, migrations applied");

    let state = setup_app_state(db, &config.auth).await;
    if config.auth.require_token {
        info!("Bearer tokens required outside /login and /health");
    }

    let app = api::create_router(state);
    let port = args.port.unwrap_or(config.http.port);
    let addr = format!("{}:{}", config.http.host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 API Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
