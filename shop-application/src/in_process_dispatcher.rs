use crate::config::PipelineConfig;
use crate::context::AppContext;
use crate::dispatcher::Dispatcher;
use crate::envelope::{Envelope, FieldError, FieldErrors};
use crate::error::AppError;
use crate::registry::HandlerRegistry;
use crate::request::{Request, RequestKind};
use async_trait::async_trait;
use futures_util::FutureExt;
use std::any::type_name;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{error, trace};

const TARGET: &str = "shop::dispatcher";

/// 兜底错误条目使用的字段名
pub const DISPATCHER_FIELD: &str = "Dispatcher";

/// 进程内的 Dispatcher 实现
/// - 以 (类别, 请求类型, 响应类型) 在冻结的注册表中查找处理器
/// - 以类型擦除方式调用，并在调用端还原为 `Envelope<R::Response>`
#[derive(Clone)]
pub struct InProcessDispatcher {
    registry: Arc<HandlerRegistry>,
    config: PipelineConfig,
}

impl InProcessDispatcher {
    pub fn new(registry: Arc<HandlerRegistry>, config: PipelineConfig) -> Self {
        Self { registry, config }
    }

    /// 只读的注册表视图（用于启动日志与诊断）
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    async fn try_dispatch<R: Request>(&self, ctx: &AppContext, request: R) -> Result<Envelope<R::Response>, AppError> {
        let kind = RequestKind::classify(R::KINDS).ok_or(AppError::UnsupportedRequest(R::NAME))?;
        let call = self.registry.resolve::<R>(kind)?;
        trace!(target: TARGET, request = R::NAME, %kind, "dispatching");

        let out = call(Box::new(request), ctx).await?;
        match out.downcast::<Envelope<R::Response>>() {
            Ok(envelope) => Ok(*envelope),
            Err(_) => Err(AppError::TypeMismatch {
                expected: type_name::<Envelope<R::Response>>(),
                found: "unknown",
            }),
        }
    }
}

#[async_trait]
impl Dispatcher for InProcessDispatcher {
    async fn dispatch<R>(&self, ctx: &AppContext, request: R) -> Envelope<R::Response>
    where
        R: Request,
    {
        let outcome = AssertUnwindSafe(self.try_dispatch(ctx, request))
            .catch_unwind()
            .await;
        let e = match outcome {
            Ok(Ok(envelope)) => return envelope,
            Ok(Err(e)) => e,
            Err(payload) => AppError::from_panic(payload),
        };

        error!(
            target: TARGET,
            request = R::NAME,
            correlation_id = ctx.biz.correlation_id(),
            causation_id = ctx.biz.causation_id(),
            actor_type = ctx.biz.actor_type(),
            actor_id = ctx.biz.actor_id(),
            error = %e,
            "dispatch failed"
        );
        Envelope::failure(
            self.config.dispatch_failure_message.as_str(),
            FieldErrors::one(FieldError::new(DISPATCHER_FIELD, e.to_string())),
        )
    }
}
