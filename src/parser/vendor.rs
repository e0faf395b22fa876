//! 取引先名トークンの解析

/// 日付と通貨記号に挟まれた区間から取引先名を取り出す
///
/// 区間は「空白1文字以上 + 取引先名 + 空白1文字以上」でなければならない。
/// 取引先名は英字と半角スペースのみ。数字や記号が混じる場合は不一致とする。
pub fn match_vendor(segment: &str) -> Option<&str> {
    let vendor = segment.trim();
    // 空白のみの区間は一致させない（過剰抽出より取りこぼしを優先）
    if vendor.is_empty() {
        return None;
    }

    let leading = segment.len() - segment.trim_start().len();
    let trailing = segment.len() - segment.trim_end().len();
    if leading == 0 || trailing == 0 {
        return None;
    }

    vendor
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c == ' ')
        .then_some(vendor)
}
