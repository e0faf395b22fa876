//! CSV出力

use crate::error::Result;
use crate::parser::ExpenseItem;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 4] = ["Date", "Vendor", "Amount", "Description"];

/// 明細をCSVとして書き込む
pub fn write_items_csv<W: Write>(items: &[ExpenseItem], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for item in items {
        let amount = item.amount.to_string();
        csv_writer.write_record([
            item.date.as_str(),
            item.vendor.as_str(),
            amount.as_str(),
            item.description.as_deref().unwrap_or(""),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// 明細をCSVファイルに書き出す
pub fn write_items_csv_file(items: &[ExpenseItem], csv_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(csv_path.as_ref())?;
    write_items_csv(items, file)
}
