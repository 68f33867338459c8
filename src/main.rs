use dataset_viz::{config, start_app, Mode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::get_configuration().expect("failed to load config");
    let log_level = config.log_level.as_str();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().json().with_level(true))
        .init();

    let mode: Mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "visualize".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    start_app(config, mode).await?;

    Ok(())
}
