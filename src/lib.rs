//! PDF経費インポーター - PDFの経費明細を SAP Concur に送信、またはCSVに書き出すツール
//!
//! # 機能
//! - PDFからページ単位でテキストを抽出
//! - 固定パターン（日付・取引先名・金額）で明細行を抽出
//! - リフレッシュトークンで認証し、Concur に経費レポートを作成
//! - CSVへの書き出し

pub mod cli;
pub mod concur;
pub mod error;
pub mod export;
pub mod parser;
pub mod pdf;
pub mod pipeline;
pub mod report;

pub use error::{ExpenseError, Result};
pub use parser::{Amount, ExpenseItem};
