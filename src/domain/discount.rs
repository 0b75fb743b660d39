/// One article row of the discount listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountRecord {
    pub store: String,
    pub description: String,
    pub format: String,
    pub origin: String,
    pub price: String,
    pub rebate_amount: f64,
    /// Percentage as displayed, sign retained when present (e.g. `"25%"`).
    pub rebate_percent: String,
    pub validity: String,
    pub link: String,
}

impl DiscountRecord {
    /// Numeric value of `rebate_percent`, or `None` if it does not parse.
    pub fn percent_value(&self) -> Option<f64> {
        parse_percent(&self.rebate_percent)
    }
}

pub(crate) fn parse_percent(text: &str) -> Option<f64> {
    text.trim()
        .trim_end_matches('%')
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
}

/// Records accumulated across pages, in page visitation order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DiscountCollection {
    records: Vec<DiscountRecord>,
}

impl DiscountCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = DiscountRecord>) {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiscountRecord> {
        self.records.iter()
    }

    /// Stable sort, largest rebate percentage first.
    pub fn sort_by_percent_desc(&mut self) {
        self.records.sort_by(|a, b| {
            let a = a.percent_value().unwrap_or(f64::NEG_INFINITY);
            let b = b.percent_value().unwrap_or(f64::NEG_INFINITY);
            b.total_cmp(&a)
        });
    }
}
