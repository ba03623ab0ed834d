use anyhow::Result;
use job_crawler::{start_web_server, AppConfig};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("job_crawler=info,rocket=warn")),
        )
        .init();

    // Rocket reads ROCKET_PORT itself; validate it early so a typo fails at
    // startup instead of surfacing as a default port.
    let port = std::env::var("ROCKET_PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;

    let config = AppConfig::load()?;
    config.ensure_directories().await?;

    info!("Starting LinkedIn Job Crawler");
    info!("Server: http://0.0.0.0:{}", port);

    start_web_server(config).await
}
