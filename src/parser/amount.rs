//! 金額トークンの解析

use serde::{Serialize, Serializer};
use std::fmt;

/// 金額（セント単位で保持するため常に非負）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    cents: u64,
}

impl Amount {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(&self) -> u64 {
        self.cents
    }

    fn as_f64(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

#[cfg(test)]
impl Amount {
    /// 整数金額から作成 (42 → 42.00)
    pub fn from_whole(units: u64) -> Option<Self> {
        units.checked_mul(100).map(Self::from_cents)
    }

    /// `123.45` 形式の文字列全体を金額として解析
    pub fn parse(text: &str) -> Option<Self> {
        match take_amount(text)? {
            (amount, "") => Some(amount),
            _ => None,
        }
    }
}

/// 常に小数点以下2桁で表示
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// JSONでは数値として送信
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// 先頭の金額トークン（数字1桁以上 + `.` + 数字2桁）を読み取り、残りの文字列と共に返す
///
/// 小数部3桁目以降は残りとして扱う（`23.505` は `23.50` + `5`）。
/// 整数部がセント換算で桁あふれする場合は不一致。
pub fn take_amount(text: &str) -> Option<(Amount, &str)> {
    let int_len = text.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return None;
    }

    let rest = text[int_len..].strip_prefix('.')?;
    let frac = rest.as_bytes().get(..2)?;
    if !frac.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let units: u64 = text[..int_len].parse().ok()?;
    let frac_cents = u64::from((frac[0] - b'0') * 10 + (frac[1] - b'0'));
    let cents = units.checked_mul(100)?.checked_add(frac_cents)?;

    Some((Amount::from_cents(cents), &rest[2..]))
}
