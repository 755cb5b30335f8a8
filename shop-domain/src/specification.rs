//! 规约（Specification）
//!
//! 将单条业务断言封装为可复用、可测试的对象，
//! 应用层的校验规则集以字段访问器 + 规约的方式声明约束。
//!
//! 这里提供商城常用的基础规约：
//! [`NotBlank`]、[`Present`]、[`MaxChars`]、[`GreaterThan`]、[`EmailAddress`]。
//!

/// 规约模式的核心 trait
///
/// 用于封装业务规则，使其可复用和可测试。
/// 要求 `Send + Sync`，以便在并发执行的校验任务之间共享。
pub trait Specification<T: ?Sized>: Send + Sync {
    /// 检查候选对象是否满足规约
    fn is_satisfied_by(&self, candidate: &T) -> bool;
}

/// 非空白：字符串去除首尾空白后不为空；`None` 视为不满足
#[derive(Clone, Copy, Debug, Default)]
pub struct NotBlank;

impl Specification<str> for NotBlank {
    fn is_satisfied_by(&self, candidate: &str) -> bool {
        !candidate.trim().is_empty()
    }
}

impl Specification<String> for NotBlank {
    fn is_satisfied_by(&self, candidate: &String) -> bool {
        !candidate.trim().is_empty()
    }
}

impl Specification<Option<String>> for NotBlank {
    fn is_satisfied_by(&self, candidate: &Option<String>) -> bool {
        candidate.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

/// 存在：可选值必须为 `Some`
#[derive(Clone, Copy, Debug, Default)]
pub struct Present;

impl<V: Send + Sync> Specification<Option<V>> for Present {
    fn is_satisfied_by(&self, candidate: &Option<V>) -> bool {
        candidate.is_some()
    }
}

/// 字符数上限（按 Unicode 标量计数）；`None` 视为满足，由 [`Present`] 负责判空
#[derive(Clone, Copy, Debug)]
pub struct MaxChars(pub usize);

impl Specification<str> for MaxChars {
    fn is_satisfied_by(&self, candidate: &str) -> bool {
        candidate.chars().count() <= self.0
    }
}

impl Specification<String> for MaxChars {
    fn is_satisfied_by(&self, candidate: &String) -> bool {
        candidate.chars().count() <= self.0
    }
}

impl Specification<Option<String>> for MaxChars {
    fn is_satisfied_by(&self, candidate: &Option<String>) -> bool {
        candidate
            .as_deref()
            .is_none_or(|s| s.chars().count() <= self.0)
    }
}

/// 严格大于给定下界
#[derive(Clone, Copy, Debug)]
pub struct GreaterThan<N>(pub N);

impl<N> Specification<N> for GreaterThan<N>
where
    N: PartialOrd + Send + Sync,
{
    fn is_satisfied_by(&self, candidate: &N) -> bool {
        *candidate > self.0
    }
}

/// 邮箱地址的宽松格式校验：`local@domain`，两侧非空、仅一个 `@`、不含空白
///
/// 不追求 RFC 5322 的完整性，只拦截明显不合法的输入。
#[derive(Clone, Copy, Debug, Default)]
pub struct EmailAddress;

impl EmailAddress {
    fn check(candidate: &str) -> bool {
        if candidate.chars().any(char::is_whitespace) {
            return false;
        }
        let mut parts = candidate.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
            _ => false,
        }
    }
}

impl Specification<str> for EmailAddress {
    fn is_satisfied_by(&self, candidate: &str) -> bool {
        Self::check(candidate)
    }
}

impl Specification<String> for EmailAddress {
    fn is_satisfied_by(&self, candidate: &String) -> bool {
        Self::check(candidate)
    }
}

impl Specification<Option<String>> for EmailAddress {
    fn is_satisfied_by(&self, candidate: &Option<String>) -> bool {
        candidate.as_deref().is_some_and(Self::check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(NotBlank.is_satisfied_by("Electronics"));
        assert!(!NotBlank.is_satisfied_by(""));
        assert!(!NotBlank.is_satisfied_by("   "));
        assert!(!NotBlank.is_satisfied_by(&None::<String>));
        assert!(NotBlank.is_satisfied_by(&Some("Ana".to_string())));
    }

    #[test]
    fn test_max_chars_counts_chars_not_bytes() {
        assert!(MaxChars(3).is_satisfied_by("ñño"));
        assert!(!MaxChars(3).is_satisfied_by("abcd"));
        assert!(MaxChars(3).is_satisfied_by(&None::<String>));
    }

    #[test]
    fn test_greater_than() {
        assert!(GreaterThan(0).is_satisfied_by(&1));
        assert!(!GreaterThan(0).is_satisfied_by(&0));
        assert!(!GreaterThan(0i64).is_satisfied_by(&-5));
    }

    #[test]
    fn test_email_address() {
        assert!(EmailAddress.is_satisfied_by("ana@shop.test"));
        assert!(!EmailAddress.is_satisfied_by("ana.shop.test"));
        assert!(!EmailAddress.is_satisfied_by("ana@@shop.test"));
        assert!(!EmailAddress.is_satisfied_by("@shop.test"));
        assert!(!EmailAddress.is_satisfied_by("ana @shop.test"));
        assert!(!EmailAddress.is_satisfied_by(&None::<String>));
    }
}
