//! 响应信封（Envelope）
//!
//! 每一条分发路径的统一返回类型：
//! `{ success, data, message, errors: [{ field, message }] }`。
//!
//! 构造器保证不存在“歧义”信封：
//! - 成功信封的 `errors` 恒为空；
//! - 失败信封的 `data` 恒为空、`message` 非空、`errors` 至少一条（[`FieldErrors`] 非空）。
//!
use crate::config::DEFAULT_UNEXPECTED_MESSAGE;
use serde::Serialize;
use std::fmt;

/// 字段级错误；`field` 为空表示与具体字段无关
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    field: Option<String>,
    message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// 不关联具体字段的错误
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// 有序且非空的字段错误列表
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn one(error: FieldError) -> Self {
        Self(vec![error])
    }

    /// 列表为空时返回 `None`
    pub fn from_vec(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// 统一响应信封
///
/// 字段私有，只能通过 [`Envelope::success`]、[`Envelope::empty`]、[`Envelope::failure`] 构造。
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Envelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
    errors: Vec<FieldError>,
}

impl<T> Envelope<T> {
    /// 携带数据的成功信封
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            errors: Vec::new(),
        }
    }

    /// 不携带数据的成功信封（如“未找到”的读取结果）
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            errors: Vec::new(),
        }
    }

    /// 失败信封；空白的 message 会被替换为通用故障文案
    pub fn failure(message: impl Into<String>, errors: FieldErrors) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            DEFAULT_UNEXPECTED_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            success: false,
            data: None,
            message: Some(message),
            errors: errors.into_vec(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// 转换成功信封中的数据；失败信封原样保留错误与文案
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
            errors: self.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_has_no_errors() {
        let env = Envelope::success(true, "created");
        assert!(env.is_success());
        assert_eq!(env.data(), Some(&true));
        assert!(env.errors().is_empty());
    }

    #[test]
    fn failure_has_no_data_and_at_least_one_error() {
        let env: Envelope<bool> =
            Envelope::failure("validation errors", FieldErrors::one(FieldError::new("Name", "required")));
        assert!(!env.is_success());
        assert_eq!(env.data(), None);
        assert_eq!(env.errors().len(), 1);
        assert_eq!(env.errors()[0].field(), Some("Name"));
    }

    #[test]
    fn blank_failure_message_is_replaced() {
        let env: Envelope<()> = Envelope::failure("  ", FieldErrors::one(FieldError::general("boom")));
        assert_eq!(env.message(), Some(DEFAULT_UNEXPECTED_MESSAGE));
    }

    #[test]
    fn empty_field_errors_cannot_be_built() {
        assert!(FieldErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn serializes_to_wire_shape() {
        let env: Envelope<i32> = Envelope::failure(
            "validation errors",
            FieldErrors::one(FieldError::new("Id", "Id must be greater than 0.")),
        );
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({
                "success": false,
                "data": null,
                "message": "validation errors",
                "errors": [{ "field": "Id", "message": "Id must be greater than 0." }]
            })
        );

        let ok = Envelope::<i32>::empty("category not found");
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "success": true, "data": null, "message": "category not found", "errors": [] })
        );
    }

    #[test]
    fn map_keeps_failure_intact() {
        let env: Envelope<i32> = Envelope::failure("x", FieldErrors::one(FieldError::general("e")));
        let mapped = env.map(|n| n.to_string());
        assert!(!mapped.is_success());
        assert_eq!(mapped.errors().len(), 1);
    }
}
