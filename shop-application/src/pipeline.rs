//! 管线装配
//!
//! 功能模块实现 [`HandlerModule`]，在一处登记自己的规则集与处理器。
//! 装配分两步：先收集全部规则集并冻结校验注册表，再以共享的
//! [`HandlerExecutor`] 注册处理器并冻结处理器注册表。
//!
use crate::config::PipelineConfig;
use crate::error::AppError;
use crate::executor::HandlerExecutor;
use crate::in_process_dispatcher::InProcessDispatcher;
use crate::registry::{HandlerRegistry, HandlerRegistryBuilder};
use crate::validation::{ValidationService, ValidatorRegistry, ValidatorRegistryBuilder};
use std::sync::Arc;
use tracing::info;

/// 一组相关请求（功能切片）的注册入口
pub trait HandlerModule: Send + Sync {
    /// 模块名（用于日志）
    fn name(&self) -> &'static str;

    fn register_validators(&self, _validators: &mut ValidatorRegistryBuilder) -> Result<(), AppError> {
        Ok(())
    }

    fn register_handlers(
        &self,
        handlers: &mut HandlerRegistryBuilder,
        executor: &Arc<HandlerExecutor>,
    ) -> Result<(), AppError>;
}

pub struct Pipeline;

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }
}

#[derive(Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
    modules: Vec<Box<dyn HandlerModule>>,
}

impl PipelineBuilder {
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn install(mut self, module: impl HandlerModule + 'static) -> Self {
        self.modules.push(Box::new(module));
        self
    }

    /// 冻结注册表并返回分发器；任何重复注册都会让装配失败
    pub fn build(self) -> Result<InProcessDispatcher, AppError> {
        let mut validators = ValidatorRegistry::builder();
        for module in &self.modules {
            module.register_validators(&mut validators)?;
        }
        let validators = validators.build();
        let rule_sets: usize = validators.registered().iter().map(|(_, n)| n).sum();

        let executor = Arc::new(HandlerExecutor::new(
            ValidationService::new(Arc::new(validators), self.config.validation_concurrency),
            self.config.clone(),
        ));

        let mut handlers = HandlerRegistry::builder();
        for module in &self.modules {
            module.register_handlers(&mut handlers, &executor)?;
            info!(target: "shop::pipeline", module = module.name(), "module installed");
        }
        let handlers = handlers.build();

        info!(
            target: "shop::pipeline",
            modules = self.modules.len(),
            handlers = handlers.len(),
            rule_sets,
            "pipeline ready"
        );
        Ok(InProcessDispatcher::new(Arc::new(handlers), self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::command_handler::CommandHandler;
    use crate::context::AppContext;
    use crate::dispatcher::Dispatcher;
    use crate::envelope::Envelope;
    use crate::request::{Request, RequestKind};
    use crate::validation::RuleSet;
    use async_trait::async_trait;
    use shop_domain::specification::NotBlank;

    #[derive(Debug)]
    struct Rename {
        name: String,
    }

    impl Request for Rename {
        const NAME: &'static str = "Rename";
        const KINDS: &'static [RequestKind] = &[RequestKind::Command];
        type Response = bool;
    }

    impl Command for Rename {}

    struct RenameHandler {
        executor: Arc<HandlerExecutor>,
    }

    #[async_trait]
    impl CommandHandler<Rename> for RenameHandler {
        async fn handle(&self, ctx: &AppContext, cmd: Rename) -> Envelope<bool> {
            self.executor
                .execute(ctx, &cmd, || async { Ok(Envelope::success(true, "renamed")) })
                .await
        }
    }

    struct RenameModule;

    impl HandlerModule for RenameModule {
        fn name(&self) -> &'static str {
            "rename"
        }

        fn register_validators(&self, validators: &mut ValidatorRegistryBuilder) -> Result<(), AppError> {
            validators.add::<Rename, _>(RuleSet::<Rename>::new("rename").rule(
                "Name",
                |r| r.name.as_str(),
                NotBlank,
                "Name is required.",
            ))?;
            Ok(())
        }

        fn register_handlers(
            &self,
            handlers: &mut HandlerRegistryBuilder,
            executor: &Arc<HandlerExecutor>,
        ) -> Result<(), AppError> {
            handlers.register_command::<Rename, _>(Arc::new(RenameHandler {
                executor: executor.clone(),
            }))?;
            Ok(())
        }
    }

    #[tokio::test]
    async fn installed_module_validates_then_handles() {
        let dispatcher = Pipeline::builder().install(RenameModule).build().unwrap();
        let ctx = AppContext::default();

        let rejected = dispatcher.dispatch(&ctx, Rename { name: "".into() }).await;
        assert!(!rejected.is_success());
        assert_eq!(rejected.errors()[0].field(), Some("Name"));

        let accepted = dispatcher.dispatch(&ctx, Rename { name: "Tools".into() }).await;
        assert_eq!(accepted, Envelope::success(true, "renamed"));
    }

    #[test]
    fn installing_a_module_twice_fails() {
        let err = Pipeline::builder()
            .install(RenameModule)
            .install(RenameModule)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, AppError::AlreadyRegistered { .. }));
    }

    #[tokio::test]
    async fn custom_messages_flow_into_the_dispatcher() {
        let config = PipelineConfig::builder()
            .dispatch_failure_message("request failed")
            .build();
        let dispatcher = Pipeline::builder().config(config).build().unwrap();
        assert!(dispatcher.registry().is_empty());

        let env = dispatcher
            .dispatch(&AppContext::default(), Rename { name: "Tools".into() })
            .await;
        assert_eq!(env.message(), Some("request failed"));
    }
}
