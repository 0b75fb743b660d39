use crate::error::Result;
use reqwest::Client;
use scraper::Html;
use tracing::debug;

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// GETs `url` and parses the body. Non-2xx statuses are errors.
    pub async fn fetch(&self, url: &str) -> Result<Html> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(Html::parse_document(&body))
    }
}
