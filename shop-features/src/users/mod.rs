//! 用户
//!
//! 注册用户，以及按标识或邮箱读取。读取结果为 [`UserResponse`]，不含密码。
//!
mod handlers;
mod requests;
mod rules;

pub use handlers::UserHandlers;
pub use requests::{CreateUser, GetUserByEmail, GetUserById, UserResponse};

use shop_application::registry::HandlerRegistryBuilder;
use shop_application::validation::ValidatorRegistryBuilder;
use shop_application::{AppError, HandlerExecutor, HandlerModule};
use shop_domain::persist::UserRepository;
use std::sync::Arc;

pub struct UsersModule {
    repo: Arc<dyn UserRepository>,
}

impl UsersModule {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

impl HandlerModule for UsersModule {
    fn name(&self) -> &'static str {
        "users"
    }

    fn register_validators(&self, validators: &mut ValidatorRegistryBuilder) -> Result<(), AppError> {
        validators
            .add::<CreateUser, _>(rules::create_user())?
            .add::<GetUserById, _>(rules::get_user_by_id())?
            .add::<GetUserByEmail, _>(rules::get_user_by_email())?;
        Ok(())
    }

    fn register_handlers(
        &self,
        handlers: &mut HandlerRegistryBuilder,
        executor: &Arc<HandlerExecutor>,
    ) -> Result<(), AppError> {
        let h = Arc::new(UserHandlers::new(self.repo.clone(), executor.clone()));
        handlers
            .register_command::<CreateUser, _>(h.clone())?
            .register_query::<GetUserById, _>(h.clone())?
            .register_query::<GetUserByEmail, _>(h)?;
        Ok(())
    }
}
