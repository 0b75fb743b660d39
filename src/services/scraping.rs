use crate::domain::DiscountCollection;
use crate::error::{CircularError, Result};
use crate::scrapers::{PageSchema, RowPolicy};
use crate::services::fetcher::PageFetcher;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing::info;

pub struct ScrapingService {
    fetcher: PageFetcher,
    schema: Box<dyn PageSchema>,
    row_policy: RowPolicy,
}

impl ScrapingService {
    pub fn new(client: Client, schema: Box<dyn PageSchema>) -> Self {
        info!("Created new Scraping service");
        Self {
            fetcher: PageFetcher::new(client),
            schema,
            row_policy: RowPolicy::default(),
        }
    }

    pub fn with_row_policy(mut self, row_policy: RowPolicy) -> Self {
        self.row_policy = row_policy;
        self
    }

    pub async fn page_count(&self, base_url: &str) -> Result<u32> {
        let document = self.fetcher.fetch(base_url).await?;
        let pages = self.schema.page_count(&document)?;
        info!("Nombre de pages : {pages}");
        Ok(pages)
    }

    /// Fetches one page and appends its records to `collection`.
    pub async fn scrape_page(
        &self,
        url: &str,
        mut collection: DiscountCollection,
    ) -> Result<DiscountCollection> {
        let document = self.fetcher.fetch(url).await?;
        let records = self.schema.extract_discounts(&document, self.row_policy)?;
        collection.extend(records);
        Ok(collection)
    }

    pub async fn scrape_all(&self, base_url: &str) -> Result<DiscountCollection> {
        let pages = self.page_count(base_url).await?;

        let pb = ProgressBar::new(u64::from(pages));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| CircularError::Other(e.to_string()))?,
        );

        let mut collection = DiscountCollection::new();

        for page in 1..=pages {
            let url = self.schema.page_url(base_url, page);
            info!("Scraping page {page} - URL: {url}");
            pb.set_message(format!("page {page}"));

            collection = self.scrape_page(&url, collection).await?;
            pb.inc(1);
        }

        pb.finish_with_message(format!("{} records", collection.len()));
        Ok(collection)
    }
}
