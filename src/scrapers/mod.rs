use crate::domain::DiscountRecord;
use crate::error::Result;
use scraper::{ElementRef, Html};
use tracing::{debug, warn};

pub(crate) mod pagination;
pub(crate) mod rebate;
pub(crate) mod supermarches;

/// What to do with a table row that fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Stop the whole run on the first malformed row.
    #[default]
    Abort,
    /// Log the row and carry on with the next one.
    Skip,
}

/// Markup knowledge for one listing layout.
pub trait PageSchema {
    /// Total number of listing pages, read from the first page.
    fn page_count(&self, document: &Html) -> Result<u32>;

    /// The table holding the article rows, if the page has one.
    fn locate_table<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>>;

    /// All rows of `table`, header row included.
    fn rows<'a>(&self, table: ElementRef<'a>) -> Vec<ElementRef<'a>>;

    /// Parses one data row; `index` is the row position within the table.
    fn parse_row(&self, row: ElementRef<'_>, index: usize) -> Result<DiscountRecord>;

    fn page_url(&self, base_url: &str, page: u32) -> String {
        let separator = if base_url.contains('?') { '&' } else { '?' };
        format!("{base_url}{separator}page={page}")
    }

    fn extract_discounts(
        &self,
        document: &Html,
        policy: RowPolicy,
    ) -> Result<Vec<DiscountRecord>> {
        let Some(table) = self.locate_table(document) else {
            warn!("Aucune table trouvée.");
            return Ok(Vec::new());
        };

        let mut records = Vec::new();

        for (index, row) in self.rows(table).into_iter().enumerate().skip(1) {
            match self.parse_row(row, index) {
                Ok(record) => records.push(record),
                Err(e) if policy == RowPolicy::Skip => warn!("Skipping row: {e}"),
                Err(e) => return Err(e),
            }
        }

        debug!("Extracted {} records", records.len());
        Ok(records)
    }
}
