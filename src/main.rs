use anyhow::{Error, Result, anyhow};
use sns_receiver::{api::run_api_server, config::Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().json().with_env_filter(filter).init();

    let config = Config::load()?;

    run_api_server(config)
        .await
        .map_err(|e| anyhow!("Notification receiver failed: {}", e))
}
