use crate::config::Config;
use crate::error::Result;
use crate::scrapers::supermarches::SupermarchesSchema;
use crate::scrapers::RowPolicy;
use crate::services::export::XlsxExporter;
use crate::services::scraping::ScrapingService;
use std::process::ExitCode;
use tracing::{error, info, warn};

mod config;
mod domain;
mod error;
mod scrapers;
mod services;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = Config::new()?;

    let scraping = ScrapingService::new(config.http_client, Box::new(SupermarchesSchema))
        .with_row_policy(RowPolicy::Abort);
    let collection = scraping.scrape_all(&config.base_url).await?;

    if collection.is_empty() {
        warn!("No discounts found, exporting header row only");
    }

    let exporter = XlsxExporter::new(config.output_path);
    exporter.export(collection)?;

    println!("Data exported to {}", exporter.path().display());
    info!("Scraping completed successfully!");
    Ok(())
}
