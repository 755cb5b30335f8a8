use crate::context::AppContext;
use crate::envelope::FieldError;
use async_trait::async_trait;

/// 单次校验共享的只读上下文
pub struct ValidationContext<'a, T> {
    request: &'a T,
    app: &'a AppContext,
}

impl<'a, T> ValidationContext<'a, T> {
    pub fn new(request: &'a T, app: &'a AppContext) -> Self {
        Self { request, app }
    }

    pub fn request(&self) -> &'a T {
        self.request
    }

    pub fn app(&self) -> &'a AppContext {
        self.app
    }
}

/// 针对类型 `T` 的一个规则集
///
/// 返回该规则集发现的全部字段错误（按规则顺序），无错误时返回空列表。
#[async_trait]
pub trait Validator<T>: Send + Sync
where
    T: Send + Sync,
{
    /// 规则集名称（用于日志）
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    async fn validate(&self, cx: &ValidationContext<'_, T>) -> Vec<FieldError>;
}
