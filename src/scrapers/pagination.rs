use crate::error::{CircularError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static PAGE_TOTAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"sur(\d+)\)").unwrap());

/// Text of the first innermost cell mentioning `marker`, e.g. "(Page 1 sur 7)".
pub fn find_page_info(document: &Html, marker: &str) -> Option<String> {
    document
        .select(&CELL)
        .filter(|cell| cell.select(&CELL).next().is_none())
        .map(|cell| cell.text().collect::<String>())
        .find(|text| text.contains(marker))
}

/// Total page count from a page info text such as "(Page 1 sur 7)".
pub fn parse_page_total(page_info: &str) -> Result<u32> {
    let compact: String = page_info
        .chars()
        .filter(|&c| !matches!(c, ' ' | '\u{a0}'))
        .collect();

    let total = PAGE_TOTAL
        .captures(&compact)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or_else(|| CircularError::PageCount(format!("no page total in {page_info:?}")))?;

    if total == 0 {
        return Err(CircularError::PageCount("page total is zero".to_string()));
    }

    Ok(total)
}
