use super::pagination::{find_page_info, parse_page_total};
use super::rebate::parse_rebate;
use super::PageSchema;
use crate::domain::DiscountRecord;
use crate::error::{CircularError, Result};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

pub const ARTICLE_LINK_TITLE: &str = "Cliquez ici pour ajouter cet article à votre liste d'épicerie";

const STORE_LABEL: &str = "Circ. - Mag.";
const PAGE_MARKER: &str = "Page";
const COLUMN_COUNT: usize = 8;

static ARTICLE_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[title]").unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Layout of the supermarches.ca "Aubaines" listing.
///
/// Article rows carry eight cells: a decorative cell, then description,
/// format, origin, price, rebate, validity and finally the store cell,
/// whose first anchor links to the circular.
pub struct SupermarchesSchema;

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

impl PageSchema for SupermarchesSchema {
    fn page_count(&self, document: &Html) -> Result<u32> {
        let page_info = find_page_info(document, PAGE_MARKER)
            .ok_or_else(|| CircularError::PageCount("no page info cell".to_string()))?;
        parse_page_total(&page_info)
    }

    fn locate_table<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document
            .select(&ARTICLE_LINK)
            .filter(|anchor| anchor.value().attr("title") == Some(ARTICLE_LINK_TITLE))
            .find_map(|anchor| {
                anchor
                    .ancestors()
                    .filter_map(ElementRef::wrap)
                    .find(|el| el.value().name() == "table")
            })
    }

    fn rows<'a>(&self, table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        table.select(&ROW).collect()
    }

    fn parse_row(&self, row: ElementRef<'_>, index: usize) -> Result<DiscountRecord> {
        let malformed = |reason: String| CircularError::MalformedRow { row: index, reason };

        let cells: Vec<ElementRef> = row.select(&CELL).collect();
        if cells.len() != COLUMN_COUNT {
            return Err(malformed(format!(
                "expected {COLUMN_COUNT} columns, found {}",
                cells.len()
            )));
        }

        let rebate = parse_rebate(&cell_text(cells[5])).map_err(|e| malformed(e.to_string()))?;

        let store_cell = cells[7];
        let link = store_cell
            .select(&LINK)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| malformed("store cell has no link".to_string()))?;

        Ok(DiscountRecord {
            store: cell_text(store_cell).replace(STORE_LABEL, "").trim().to_string(),
            description: cell_text(cells[1]),
            format: cell_text(cells[2]),
            origin: cell_text(cells[3]),
            price: cell_text(cells[4]),
            rebate_amount: rebate.amount,
            rebate_percent: rebate.percent,
            validity: cell_text(cells[6]),
            link: link.to_string(),
        })
    }
}
