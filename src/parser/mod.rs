//! テキスト解析モジュール - 経費明細行の抽出
//!
//! 1行ごとに次の固定パターンを探す（行内のどの位置からでもよく、最も左の一致を採用）:
//!
//! ```text
//! <日付 MM/DD/YYYY> <空白> <取引先名 英字と空白> <空白> $<金額 数字.数字2桁>
//! ```
//!
//! 一致しない行は黙ってスキップする。

mod amount;
mod date;
mod vendor;

pub use amount::Amount;

/// 金額の直前に置かれる通貨記号
const CURRENCY_MARKER: char = '$';

/// PDFから抽出された経費明細
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseItem {
    /// 取引先名
    pub vendor: String,
    /// 取引日 (MM/DD/YYYY形式)
    pub date: String,
    /// 金額
    pub amount: Amount,
    /// 説明（PDFからは抽出しない）
    pub description: Option<String>,
}

impl ExpenseItem {
    pub fn new(vendor: impl Into<String>, date: impl Into<String>, amount: Amount) -> Self {
        Self {
            vendor: vendor.into(),
            date: date.into(),
            amount,
            description: None,
        }
    }
}

/// 1行を解析
pub fn parse_line(line: &str) -> Option<ExpenseItem> {
    line.char_indices()
        .find_map(|(start, _)| match_at(&line[start..]))
}

/// 1ページ分のテキストを解析
pub fn parse_page(text: &str) -> Vec<ExpenseItem> {
    text.split(is_line_break).filter_map(parse_line).collect()
}

/// 全ページを順番に解析
pub fn parse_pages<I, S>(pages: I) -> Vec<ExpenseItem>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pages
        .into_iter()
        .flat_map(|page| parse_page(page.as_ref()))
        .collect()
}

/// 行区切り文字（`\n` `\r` のほか改ページ・垂直タブ・Unicodeの行/段落区切りも含む）
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// 指定位置から始まるパターンに一致するか
fn match_at(text: &str) -> Option<ExpenseItem> {
    let (date, rest) = date::take_date(text)?;

    // 取引先名には記号が入らないので、最初の通貨記号だけが候補になる
    let marker = rest.find(CURRENCY_MARKER)?;
    let vendor = vendor::match_vendor(&rest[..marker])?;
    let (amount, _) = amount::take_amount(&rest[marker + CURRENCY_MARKER.len_utf8()..])?;

    Some(ExpenseItem::new(vendor, date, amount))
}
