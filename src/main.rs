use chrono::{NaiveDate, Utc};

mod cache;
mod config;
mod error;
mod models;
mod moderation;
mod news;
mod reports;
mod rules;
mod scheduler;
mod store;
mod trends;

use cache::{CachePublisher, CacheReader};
use config::Config;
use error::{AppError, Result};
use models::Window;
use moderation::ModerationService;
use news::{Classifier, RecordLoader};
use reports::{ReportKind, ReportPayload, ReportStore};
use scheduler::RefreshScheduler;
use store::Store;
use trends::Aggregator;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Load configuration
    let config = Config::load()?;

    let store = Store::new(&config.store_url)?;
    let classifier = Classifier::default();
    let loader = RecordLoader::new(store.clone(), classifier);
    let aggregator = Aggregator::new(
        config.sample_news_limit,
        config.country_distribution_limit,
    );
    let publisher = CachePublisher::new(store.clone(), loader, aggregator);
    let reader = CacheReader::new(store.clone());

    // One-shot headless refresh
    if args.len() >= 2 && args[1] == "--refresh" {
        publisher.refresh().await?;
        println!("Refreshed news cache");
        return Ok(());
    }

    // Moderation removal: --remove <key> [reason]
    if args.len() >= 2 && args[1] == "--remove" {
        let key = args
            .get(2)
            .ok_or_else(|| anyhow::anyhow!("--remove requires a record key"))?;
        let reason = args.get(3).map(String::as_str).unwrap_or("unspecified");
        let moderation = ModerationService::new(store.clone(), publisher.clone());
        moderation.remove_record(key, reason).await?;
        println!("Removed {}", key);
        return Ok(());
    }

    // Print a cached trends snapshot: --trends <weekly|monthly>
    if args.len() >= 2 && args[1] == "--trends" {
        let window = args
            .get(2)
            .and_then(|s| Window::parse(s))
            .ok_or_else(|| anyhow::anyhow!("--trends requires a window: weekly or monthly"))?;
        match reader.trends(window).await {
            Some(snapshot) => println!("{}", serde_json::to_string_pretty(&snapshot)?),
            None => println!("No {} trends published yet", window),
        }
        return Ok(());
    }

    // Print the cached homepage snapshot
    if args.len() >= 2 && args[1] == "--homepage" {
        match reader.homepage().await {
            Some(snapshot) => println!("{}", serde_json::to_string_pretty(&snapshot)?),
            None => println!("No homepage snapshot published yet"),
        }
        return Ok(());
    }

    // Print a stored report: --report <daily|weekly|monthly> [YYYY-MM-DD]
    if args.len() >= 2 && args[1] == "--report" {
        let kind = args
            .get(2)
            .and_then(|s| ReportKind::parse(s))
            .ok_or_else(|| {
                anyhow::anyhow!("--report requires a kind: daily, weekly or monthly")
            })?;
        let date = match args.get(3) {
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| AppError::Config(format!("invalid date {}: {}", s, e)))?,
            None => Utc::now().date_naive(),
        };
        match ReportStore::new(store.clone()).load(kind, date).await {
            Some(ReportPayload::Json(value)) => {
                println!("{}", serde_json::to_string_pretty(&value)?)
            }
            Some(ReportPayload::Text(text)) => println!("{}", text),
            None => println!("No {} report for {}", args[2], date),
        }
        return Ok(());
    }

    // Long-running mode: refresh eagerly, then on the configured interval
    if let Err(e) = store.ping().await {
        tracing::warn!("store not reachable at startup: {}", e);
    }

    if let Err(e) = publisher.refresh().await {
        tracing::error!("initial refresh failed: {}", e);
    }

    let mut scheduler = RefreshScheduler::new().await?;
    scheduler
        .add_refresh_job("refresh-news", config.refresh_interval(), publisher.clone())
        .await?;
    scheduler.start().await?;

    tracing::info!("econews-watch running; press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;

    scheduler.shutdown().await?;
    Ok(())
}
