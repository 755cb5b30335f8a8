use super::requests::{CreateUser, GetUserByEmail, GetUserById, UserResponse};
use async_trait::async_trait;
use shop_application::command_handler::CommandHandler;
use shop_application::query_handler::QueryHandler;
use shop_application::request::Request;
use shop_application::{AppContext, AppError, Envelope, HandlerExecutor};
use shop_domain::entity::User;
use shop_domain::persist::UserRepository;
use std::sync::Arc;

const NOT_FOUND: &str = "User not found.";

#[derive(Clone)]
pub struct UserHandlers {
    repo: Arc<dyn UserRepository>,
    executor: Arc<HandlerExecutor>,
}

fn found(user: Option<User>) -> Envelope<UserResponse> {
    match user {
        Some(user) => Envelope::success(UserResponse::from(user), "User retrieved successfully."),
        None => Envelope::empty(NOT_FOUND),
    }
}

impl UserHandlers {
    pub fn new(repo: Arc<dyn UserRepository>, executor: Arc<HandlerExecutor>) -> Self {
        Self { repo, executor }
    }

    async fn create(&self, ctx: &AppContext, cmd: &CreateUser) -> Result<Envelope<bool>, AppError> {
        ctx.ensure_active(CreateUser::NAME)?;
        let rows = self.repo.insert(cmd.new_user()).await?;
        Ok(Envelope::success(rows > 0, "User registered successfully."))
    }

    async fn by_id(&self, ctx: &AppContext, q: &GetUserById) -> Result<Envelope<UserResponse>, AppError> {
        ctx.ensure_active(GetUserById::NAME)?;
        Ok(found(self.repo.find_by_id(q.user_id).await?))
    }

    async fn by_email(&self, ctx: &AppContext, q: &GetUserByEmail) -> Result<Envelope<UserResponse>, AppError> {
        ctx.ensure_active(GetUserByEmail::NAME)?;
        Ok(found(self.repo.find_by_email(q.email.trim()).await?))
    }
}

#[async_trait]
impl CommandHandler<CreateUser> for UserHandlers {
    async fn handle(&self, ctx: &AppContext, cmd: CreateUser) -> Envelope<bool> {
        self.executor.execute(ctx, &cmd, || self.create(ctx, &cmd)).await
    }
}

#[async_trait]
impl QueryHandler<GetUserById> for UserHandlers {
    async fn handle(&self, ctx: &AppContext, q: GetUserById) -> Envelope<UserResponse> {
        self.executor.execute(ctx, &q, || self.by_id(ctx, &q)).await
    }
}

#[async_trait]
impl QueryHandler<GetUserByEmail> for UserHandlers {
    async fn handle(&self, ctx: &AppContext, q: GetUserByEmail) -> Envelope<UserResponse> {
        self.executor.execute(ctx, &q, || self.by_email(ctx, &q)).await
    }
}
