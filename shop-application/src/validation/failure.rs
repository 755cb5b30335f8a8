use crate::envelope::{FieldError, FieldErrors};
use std::fmt;

/// 校验失败：有序、非空的字段错误列表
///
/// 与普通故障区分开，执行包装据此生成“校验错误”信封而非“意外错误”信封。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationFailure(FieldErrors);

impl ValidationFailure {
    /// 列表为空时返回 `None`：不存在没有错误的校验失败
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        FieldErrors::from_vec(errors).map(Self)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.0
    }

    pub fn into_errors(self) -> FieldErrors {
        self.0
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}
