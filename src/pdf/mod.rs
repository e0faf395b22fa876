//! PDF処理モジュール - PDFからページ単位のテキストを抽出

use crate::error::{ExpenseError, Result};
use std::panic;
use std::path::Path;
use tracing::debug;

/// PDFの全ページのテキストをページ順に抽出
///
/// 行はレイアウト上の位置で改行される。ファイルを開けない・解析できない場合のみエラー。
/// テキストを持たないページ（スキャン画像など）は空文字列になる。
pub fn extract_page_texts(pdf_path: impl AsRef<Path>) -> Result<Vec<String>> {
    let pdf_path = pdf_path.as_ref();
    let open_error = |message: String| ExpenseError::DocumentOpen {
        path: pdf_path.to_path_buf(),
        message,
    };

    let bytes = std::fs::read(pdf_path).map_err(|e| open_error(e.to_string()))?;

    // 壊れたPDFで抽出ライブラリがパニックすることがあるため捕捉する
    let texts = match panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes)) {
        Ok(Ok(texts)) => texts,
        Ok(Err(e)) => return Err(open_error(e.to_string())),
        Err(_) => return Err(open_error("PDFの解析中に異常終了しました".to_string())),
    };

    debug!(path = %pdf_path.display(), pages = texts.len(), "PDFを読み込みました");
    Ok(texts)
}
