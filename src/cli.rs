//! コマンドライン引数

use crate::concur::{ClientCredentials, DEFAULT_BASE_URL};
use crate::error::{ExpenseError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pdf_expense_import",
    version,
    about = "PDFの経費明細から Concur の経費レポートを作成"
)]
pub struct Cli {
    /// 入力PDFファイル
    pub pdf: PathBuf,

    /// Concur クライアントID
    #[arg(long, env = "CONCUR_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// Concur クライアントシークレット
    #[arg(long, env = "CONCUR_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Concur リフレッシュトークン
    #[arg(long, env = "CONCUR_REFRESH_TOKEN", hide_env_values = true)]
    pub refresh_token: Option<String>,

    /// Concur API のベースURL
    #[arg(long, env = "CONCUR_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Concur に送信せずCSVに書き出す場合の出力先
    #[arg(long, value_name = "PATH")]
    pub csv_output: Option<PathBuf>,
}

/// 実行モード
#[derive(Debug)]
pub enum Mode {
    /// CSVに書き出す
    Csv(PathBuf),
    /// Concur に送信する
    Submit(ClientCredentials),
}

impl Cli {
    /// 実行モードを決定
    ///
    /// CSV出力先がなければ認証情報3つがすべて必要。
    pub fn mode(&self) -> Result<Mode> {
        if let Some(csv_path) = &self.csv_output {
            return Ok(Mode::Csv(csv_path.clone()));
        }

        match (&self.client_id, &self.client_secret, &self.refresh_token) {
            (Some(id), Some(secret), Some(refresh))
                if !id.is_empty() && !secret.is_empty() && !refresh.is_empty() =>
            {
                Ok(Mode::Submit(ClientCredentials::new(id, secret, refresh)))
            }
            _ => Err(ExpenseError::Configuration(
                "--csv-output を指定しない場合は Concur の認証情報 (--client-id, --client-secret, --refresh-token) が必要です"
                    .to_string(),
            )),
        }
    }
}
