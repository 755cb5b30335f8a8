use super::failure::ValidationFailure;
use super::registry::ValidatorRegistry;
use super::validator::ValidationContext;
use crate::context::AppContext;
use futures_util::{StreamExt, stream};
use std::sync::Arc;
use tracing::debug;

/// 校验服务：按请求的具体类型执行全部规则集
#[derive(Clone)]
pub struct ValidationService {
    registry: Arc<ValidatorRegistry>,
    concurrency: usize,
}

impl ValidationService {
    pub fn new(registry: Arc<ValidatorRegistry>, concurrency: usize) -> Self {
        Self {
            registry,
            concurrency: concurrency.max(1),
        }
    }

    /// 执行 `T` 的全部规则集
    ///
    /// 规则集在同一任务内以有界并发执行，汇总时保持注册顺序（再按规则顺序），
    /// 因此同一输入每次得到相同的错误列表。
    pub async fn validate<T>(&self, ctx: &AppContext, request: &T) -> Result<(), ValidationFailure>
    where
        T: Send + Sync + 'static,
    {
        let validators = self.registry.validators_for::<T>();
        if validators.is_empty() {
            return Ok(());
        }

        let cx = ValidationContext::new(request, ctx);
        let cx = &cx;
        let pending: Vec<_> = validators
            .iter()
            .map(|v| async move {
                let errors = v.validate(cx).await;
                if !errors.is_empty() {
                    debug!(target: "shop::validation", rule_set = v.name(), errors = errors.len(), "rule set failed");
                }
                errors
            })
            .collect();

        let batches: Vec<_> = stream::iter(pending)
            .buffered(self.concurrency)
            .collect()
            .await;

        match ValidationFailure::from_errors(batches.into_iter().flatten().collect()) {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}
