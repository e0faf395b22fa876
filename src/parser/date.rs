//! 日付トークンの解析

/// 日付トークンの長さ (MM/DD/YYYY)
const DATE_LEN: usize = 10;

/// 先頭の日付トークン（数字2桁/数字2桁/数字4桁）を読み取り、残りの文字列と共に返す
///
/// 桁数と区切りのみを確認し、月日の妥当性は検証しない。
pub fn take_date(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes().get(..DATE_LEN)?;

    let matches = bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'/',
        _ => b.is_ascii_digit(),
    });

    matches.then(|| text.split_at(DATE_LEN))
}
