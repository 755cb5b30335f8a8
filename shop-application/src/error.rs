use crate::request::RequestKind;
use shop_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("handler not found: kind={kind}, request={request}, response={response}")]
    HandlerNotFound {
        kind: RequestKind,
        request: &'static str,
        response: &'static str,
    },

    #[error("handler already registered: kind={kind}, request={request}, response={response}")]
    AlreadyRegistered {
        kind: RequestKind,
        request: &'static str,
        response: &'static str,
    },

    #[error("unsupported request: {0} is neither a command nor a query")]
    UnsupportedRequest(&'static str),

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("operation cancelled: {0}")]
    Cancelled(&'static str),

    #[error("panicked: {0}")]
    Panicked(String),
}

impl AppError {
    /// 从 `catch_unwind` 捕获的载荷中提取可读的 panic 信息
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        AppError::Panicked(message)
    }
}
