//! エラー定義

use std::path::PathBuf;
use thiserror::Error;

/// 経費インポート処理のエラー
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// PDFファイル自体を開けない（パス不正、破損したファイルなど）
    #[error("PDFファイルを開けません: {}: {message}", .path.display())]
    DocumentOpen { path: PathBuf, message: String },

    /// トークンエンドポイントでの認証失敗
    #[error("認証に失敗しました: {0}")]
    Authentication(String),

    /// レポート作成エンドポイントがエラーを返した
    #[error("レポートの送信に失敗しました (HTTP {status}): {body}")]
    Submission { status: u16, body: String },

    /// 起動時の設定不足
    #[error("設定エラー: {0}")]
    Configuration(String),

    #[error("HTTP通信に失敗: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSVの書き込みに失敗: {0}")]
    Csv(#[from] csv::Error),

    #[error("ファイル入出力に失敗: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExpenseError>;
