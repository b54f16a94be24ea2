use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attendance::{build_driver, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    info!(
        "Collecting attendance for region {} ({} per page) from {}",
        config.criteria.region, config.criteria.page_size, config.api_url
    );

    let driver = build_driver(&config)?;
    let mut stdout = std::io::stdout();

    let summary = match driver.run(&config.criteria, &mut stdout).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Run aborted, nothing written: {}", e);
            return Err(e.into());
        }
    };

    if summary.persisted {
        info!(
            "Attendee list appended to {}",
            config.stats_path.display()
        );
    }
    Ok(())
}
