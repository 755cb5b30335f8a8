use crate::error::AppError;
use bon::Builder;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// 业务上下文信息
#[derive(Builder, Default, Debug, Clone, Serialize, Deserialize)]
pub struct BusinessContext {
    /// 关联ID
    correlation_id: Option<String>,
    /// 因果ID
    causation_id: Option<String>,
    /// 发起请求的主体类型（如用户、系统等）
    actor_type: Option<String>,
    /// 发起请求的主体ID
    actor_id: Option<String>,
}

impl BusinessContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn causation_id(&self) -> Option<&str> {
        self.causation_id.as_deref()
    }

    pub fn actor_type(&self) -> Option<&str> {
        self.actor_type.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }
}

/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用（命令/查询）所需的横切信息：
/// - 业务语境（`BusinessContext`）：关联追踪 `correlation_id`、因果链 `causation_id`、
///   执行者类型/ID，故障与校验失败日志会带上这些字段；
/// - 取消信号（`cancellation`）：由传输层提供，原样传递给校验与业务动作，
///   管线自身不做超时或重试。
///
/// 典型用法：
/// ```rust
/// use shop_application::context::{AppContext, BusinessContext};
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let ctx = AppContext {
///     biz: BusinessContext::builder()
///         .correlation_id("cor-123".into())
///         .actor_type("user".into())
///         .actor_id("u-1".into())
///         .build(),
///     cancellation: token.clone(),
/// };
/// assert!(!ctx.is_cancelled());
/// token.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    /// 业务语境（链路追踪、审计主体、操作因果）
    pub biz: BusinessContext,
    /// 调用方的取消信号
    pub cancellation: CancellationToken,
}

impl AppContext {
    /// 使用调用方提供的取消信号创建上下文
    pub fn with_cancellation(cancellation: CancellationToken) -> Self {
        Self {
            cancellation,
            ..Self::default()
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// 已取消时返回 `AppError::Cancelled`，供 I/O 之前快速失败
    pub fn ensure_active(&self, operation: &'static str) -> Result<(), AppError> {
        if self.is_cancelled() {
            return Err(AppError::Cancelled(operation));
        }
        Ok(())
    }
}
