use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;

pub const OUTPUT_FILENAME: &str = "circulaires.xlsx";

pub struct Config {
    pub base_url: String,
    pub output_path: PathBuf,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let output_path = std::env::current_dir()?.join(OUTPUT_FILENAME);

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        info!("Base URL: {}", args.url);

        Ok(Self {
            base_url: args.url,
            output_path,
            http_client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_is_absolute_and_fixed() {
        let config = Config::from_args(Args::parse_from(["circulaires"])).unwrap();
        assert!(config.output_path.is_absolute());
        assert!(config.output_path.ends_with(OUTPUT_FILENAME));
        assert_eq!(config.base_url, cli::DEFAULT_BASE_URL);
    }
}
