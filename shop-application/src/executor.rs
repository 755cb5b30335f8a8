//! 执行包装（HandlerExecutor）
//!
//! 每个处理器都把业务动作交给这里执行：
//! 1. 校验：按请求的具体类型执行全部规则集，失败即返回“校验错误”信封，业务动作不会被调用；
//! 2. 执行：运行业务动作，原样返回其信封；
//! 3. 兜底：动作返回 `Err` 或发生 panic 时，返回“意外错误”信封并记录完整请求上下文。
//!
use crate::config::PipelineConfig;
use crate::context::AppContext;
use crate::envelope::{Envelope, FieldError, FieldErrors};
use crate::error::AppError;
use crate::request::Request;
use crate::validation::ValidationService;
use futures_util::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tracing::{debug, error, warn};

const TARGET: &str = "shop::executor";

/// 兜底错误条目使用的字段名
pub const EXCEPTION_FIELD: &str = "Exception";

pub struct HandlerExecutor {
    validation: ValidationService,
    config: PipelineConfig,
}

impl HandlerExecutor {
    pub fn new(validation: ValidationService, config: PipelineConfig) -> Self {
        Self { validation, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// 校验 `request` 后执行 `action`，任何结果都归一化为信封
    ///
    /// `action` 只有在校验通过后才会被调用。
    pub async fn execute<R, T, F, Fut>(&self, ctx: &AppContext, request: &R, action: F) -> Envelope<T>
    where
        R: Request,
        T: Send,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<Envelope<T>, AppError>> + Send,
    {
        if let Err(e) = ctx.ensure_active(R::NAME) {
            return self.fault(ctx, request, e);
        }

        let validated = AssertUnwindSafe(self.validation.validate(ctx, request))
            .catch_unwind()
            .await;
        match validated {
            Ok(Ok(())) => {}
            Ok(Err(failure)) => {
                warn!(
                    target: TARGET,
                    request = R::NAME,
                    correlation_id = ctx.biz.correlation_id(),
                    causation_id = ctx.biz.causation_id(),
                    actor_type = ctx.biz.actor_type(),
                    actor_id = ctx.biz.actor_id(),
                    errors = %failure,
                    "request rejected by validation"
                );
                return Envelope::failure(self.config.validation_message.as_str(), failure.into_errors());
            }
            Err(payload) => return self.fault(ctx, request, AppError::from_panic(payload)),
        }

        if let Err(e) = ctx.ensure_active(R::NAME) {
            return self.fault(ctx, request, e);
        }

        // 动作的构造也放进 catch_unwind 的范围内
        let outcome = AssertUnwindSafe(async move { action().await })
            .catch_unwind()
            .await;
        match outcome {
            Ok(Ok(envelope)) => {
                debug!(target: TARGET, request = R::NAME, success = envelope.is_success(), "request handled");
                envelope
            }
            Ok(Err(e)) => self.fault(ctx, request, e),
            Err(payload) => self.fault(ctx, request, AppError::from_panic(payload)),
        }
    }

    fn fault<R: Request, T>(&self, ctx: &AppContext, request: &R, e: AppError) -> Envelope<T> {
        error!(
            target: TARGET,
            request_name = R::NAME,
            request = ?request,
            correlation_id = ctx.biz.correlation_id(),
            causation_id = ctx.biz.causation_id(),
            actor_type = ctx.biz.actor_type(),
            actor_id = ctx.biz.actor_id(),
            error = %e,
            "request failed"
        );
        Envelope::failure(
            self.config.unexpected_message.as_str(),
            FieldErrors::one(FieldError::new(EXCEPTION_FIELD, e.to_string())),
        )
    }
}
