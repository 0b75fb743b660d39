use crate::domain::{DiscountCollection, DiscountRecord};
use crate::error::Result;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::{Path, PathBuf};
use tracing::info;

pub const HEADERS: [&str; 9] = [
    "store",
    "description",
    "format",
    "origin",
    "price",
    "rebateAmount",
    "rebatePercent",
    "validity",
    "link",
];

const COLUMN_WIDTH: f64 = 20.0;

pub struct XlsxExporter {
    path: PathBuf,
}

impl XlsxExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sorts by rebate percentage, largest first, and writes the workbook.
    pub fn export(&self, mut collection: DiscountCollection) -> Result<()> {
        collection.sort_by_percent_desc();

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, header) in (0u16..).zip(HEADERS) {
            worksheet.write_string(0, col, header)?;
            worksheet.set_column_width(col, COLUMN_WIDTH)?;
        }

        for (row, record) in (1u32..).zip(collection.iter()) {
            write_record(worksheet, row, record)?;
        }

        workbook.save(&self.path)?;
        info!("Wrote {} records to {}", collection.len(), self.path.display());

        Ok(())
    }
}

fn write_record(worksheet: &mut Worksheet, row: u32, record: &DiscountRecord) -> Result<()> {
    worksheet.write_string(row, 0, &record.store)?;
    worksheet.write_string(row, 1, &record.description)?;
    worksheet.write_string(row, 2, &record.format)?;
    worksheet.write_string(row, 3, &record.origin)?;
    worksheet.write_string(row, 4, &record.price)?;
    worksheet.write_number(row, 5, record.rebate_amount)?;
    worksheet.write_string(row, 6, &record.rebate_percent)?;
    worksheet.write_string(row, 7, &record.validity)?;
    worksheet.write_string(row, 8, &record.link)?;
    Ok(())
}
