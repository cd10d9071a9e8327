use tracing::info;

use dns_forwarder::config::Config;
use dns_forwarder::forwarder::Forwarder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "dns_forwarder=info".into()),
        )
        .init();

    let config = Config::parse(std::env::args().skip(1))?;

    info!(
        port = config.port,
        resolver = ?config.resolver,
        "starting"
    );

    let mut forwarder = Forwarder::bind(config.port, config.resolver).await?;
    forwarder.run().await
}
