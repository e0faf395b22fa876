//! PDF経費インポーター - メインエントリポイント

use anyhow::Result;
use clap::Parser;
use pdf_expense_import::cli::{Cli, Mode};
use pdf_expense_import::concur::ConcurClient;
use pdf_expense_import::pipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ロギング初期化（標準出力はレスポンスのJSON用）
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // 環境変数の読み込み（引数解析より前に）
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.mode()? {
        Mode::Csv(csv_path) => {
            pipeline::export_csv(&cli.pdf, &csv_path)?;
        }
        Mode::Submit(credentials) => {
            let mut client = ConcurClient::with_base_url(credentials, &cli.base_url);
            let response = pipeline::create_expense_report(&cli.pdf, &mut client).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
