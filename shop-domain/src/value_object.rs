//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!

use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 金额（以最小货币单位计，例如“分”）
///
/// 使用整数避免浮点误差；所有运算都是检查溢出的。
///
/// # 示例
///
/// ```
/// use shop_domain::value_object::Money;
///
/// let price: Money = "12.50".parse().unwrap();
/// assert_eq!(price.minor_units(), 1250);
/// assert_eq!(price.times(3).unwrap().to_string(), "37.50");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// 从最小货币单位创建
    pub const fn from_minor(minor_units: i64) -> Self {
        Self(minor_units)
    }

    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// 单价 x 数量
    pub fn times(&self, quantity: u32) -> DomainResult<Self> {
        self.0
            .checked_mul(i64::from(quantity))
            .map(Self)
            .ok_or_else(|| DomainError::AmountOverflow {
                reason: format!("{self} x {quantity}"),
            })
    }

    pub fn checked_add(&self, other: Money) -> DomainResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| DomainError::AmountOverflow {
                reason: format!("{self} + {other}"),
            })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// 解析 `"12"`、`"12.5"`、`"12.50"` 形式的金额，最多两位小数
impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || frac.len() > 2 || !digits_only(whole) || !digits_only(frac) {
            return Err(DomainError::Parse {
                reason: format!("invalid amount: {s}"),
            });
        }
        let whole: i64 = whole.parse()?;
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>()? * 10,
            _ => frac.parse()?,
        };
        let minor = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| DomainError::AmountOverflow {
                reason: format!("amount out of range: {s}"),
            })?;
        Ok(Self(if negative { -minor } else { minor }))
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self::from_minor(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("12".parse::<Money>().unwrap(), Money::from_minor(1200));
        assert_eq!("12.5".parse::<Money>().unwrap(), Money::from_minor(1250));
        assert_eq!("0.07".parse::<Money>().unwrap().to_string(), "0.07");
        assert_eq!(Money::from_minor(-305).to_string(), "-3.05");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("12.345".parse::<Money>().is_err());
        assert!(".5".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("1.-5".parse::<Money>().is_err());
        assert!("+1".parse::<Money>().is_err());
        match "99999999999999999999".parse::<Money>().unwrap_err() {
            DomainError::Parse { .. } => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_checked_arithmetic() {
        let price = Money::from_minor(250);
        assert_eq!(price.times(4).unwrap(), Money::from_minor(1000));
        assert!(Money::from_minor(i64::MAX).times(2).is_err());
        assert!(Money::from_minor(i64::MAX).checked_add(price).is_err());
    }
}
