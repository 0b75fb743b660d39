pub(crate) mod export;
pub(crate) mod fetcher;
pub(crate) mod scraping;
