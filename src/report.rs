//! 経費レポートの送信データ構築

use crate::parser::{Amount, ExpenseItem};
use serde::Serialize;

/// 通貨コード（単一通貨のみ対応）
pub const CURRENCY_CODE: &str = "USD";

/// 説明がない明細に付けるコメント
pub const DEFAULT_COMMENT: &str = "Imported from PDF";

/// レポート名の接頭辞
const REPORT_NAME_PREFIX: &str = "Imported Expenses";

/// レポート作成リクエスト
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPayload {
    #[serde(rename = "report-name")]
    pub report_name: String,
    pub entries: Vec<TransactionEntry>,
}

/// レポート内の1取引
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionEntry {
    #[serde(rename = "transaction-date")]
    pub transaction_date: String,
    #[serde(rename = "vendor-description")]
    pub vendor_description: String,
    #[serde(rename = "transaction-amount")]
    pub transaction_amount: TransactionAmount,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionAmount {
    pub amount: Amount,
    #[serde(rename = "currency-code")]
    pub currency_code: &'static str,
}

impl From<&ExpenseItem> for TransactionEntry {
    fn from(item: &ExpenseItem) -> Self {
        Self {
            transaction_date: item.date.clone(),
            vendor_description: item.vendor.clone(),
            transaction_amount: TransactionAmount {
                amount: item.amount,
                currency_code: CURRENCY_CODE,
            },
            comment: item
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_COMMENT.to_string()),
        }
    }
}

impl ReportPayload {
    /// 明細からレポートを作成（レポート名は元ドキュメントの識別子から生成）
    pub fn from_items(source: &str, items: &[ExpenseItem]) -> Self {
        Self {
            report_name: format!("{} {}", REPORT_NAME_PREFIX, source),
            entries: items.iter().map(TransactionEntry::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_wire_format() {
        let mut with_description =
            ExpenseItem::new("Hilton", "03/04/2024", Amount::from_cents(20000));
        with_description.description = Some("Conference hotel".to_string());

        let items = vec![
            ExpenseItem::new("Staples Inc", "01/15/2024", Amount::from_cents(2350)),
            with_description,
        ];
        let payload = ReportPayload::from_items("receipts/jan.pdf", &items);

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "report-name": "Imported Expenses receipts/jan.pdf",
                "entries": [
                    {
                        "transaction-date": "01/15/2024",
                        "vendor-description": "Staples Inc",
                        "transaction-amount": { "amount": 23.5, "currency-code": "USD" },
                        "comment": "Imported from PDF",
                    },
                    {
                        "transaction-date": "03/04/2024",
                        "vendor-description": "Hilton",
                        "transaction-amount": { "amount": 200.0, "currency-code": "USD" },
                        "comment": "Conference hotel",
                    },
                ],
            })
        );
    }

    #[test]
    fn test_empty_report() {
        let payload = ReportPayload::from_items("empty.pdf", &[]);
        assert_eq!(payload.report_name, "Imported Expenses empty.pdf");
        assert!(payload.entries.is_empty());
    }
}
