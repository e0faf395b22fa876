//! PDF → 明細 → Concur/CSV の処理フロー

use crate::concur::ConcurClient;
use crate::error::Result;
use crate::export::write_items_csv_file;
use crate::parser::{ExpenseItem, parse_pages};
use crate::pdf::extract_page_texts;
use crate::report::ReportPayload;
use std::path::Path;
use tracing::info;

/// PDFから経費明細を抽出
pub fn parse_expense_items(pdf_path: impl AsRef<Path>) -> Result<Vec<ExpenseItem>> {
    let pdf_path = pdf_path.as_ref();
    let pages = extract_page_texts(pdf_path)?;
    let items = parse_pages(&pages);

    info!(
        path = %pdf_path.display(),
        pages = pages.len(),
        items = items.len(),
        "経費明細を抽出しました"
    );
    Ok(items)
}

/// PDFから経費レポートを作成して Concur に送信
pub async fn create_expense_report(
    pdf_path: impl AsRef<Path>,
    client: &mut ConcurClient,
) -> Result<serde_json::Value> {
    let pdf_path = pdf_path.as_ref();
    let items = parse_expense_items(pdf_path)?;
    let report = ReportPayload::from_items(&pdf_path.display().to_string(), &items);

    let response = client.post_report(&report).await?;
    info!(report = %report.report_name, entries = report.entries.len(), "経費レポートを作成しました");
    Ok(response)
}

/// PDFから明細を抽出してCSVに書き出し、書き出した件数を返す
pub fn export_csv(pdf_path: impl AsRef<Path>, csv_path: impl AsRef<Path>) -> Result<usize> {
    let csv_path = csv_path.as_ref();
    let items = parse_expense_items(pdf_path)?;
    write_items_csv_file(&items, csv_path)?;

    info!(path = %csv_path.display(), rows = items.len(), "CSVを書き出しました");
    Ok(items.len())
}
