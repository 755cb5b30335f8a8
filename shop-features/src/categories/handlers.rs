use super::requests::{
    CreateCategory, DeleteCategory, GetAllCategories, GetCategoryById, UpdateCategory,
};
use async_trait::async_trait;
use shop_application::command_handler::CommandHandler;
use shop_application::query_handler::QueryHandler;
use shop_application::request::Request;
use shop_application::{AppContext, AppError, Envelope, HandlerExecutor};
use shop_domain::entity::Category;
use shop_domain::persist::CategoryRepository;
use std::sync::Arc;

const NOT_FOUND: &str = "Category not found.";

/// 分类切片的全部处理器共享同一组依赖
#[derive(Clone)]
pub struct CategoryHandlers {
    repo: Arc<dyn CategoryRepository>,
    executor: Arc<HandlerExecutor>,
}

impl CategoryHandlers {
    pub fn new(repo: Arc<dyn CategoryRepository>, executor: Arc<HandlerExecutor>) -> Self {
        Self { repo, executor }
    }

    async fn create(&self, ctx: &AppContext, cmd: &CreateCategory) -> Result<Envelope<bool>, AppError> {
        ctx.ensure_active(CreateCategory::NAME)?;
        let rows = self.repo.insert(&cmd.name).await?;
        Ok(Envelope::success(rows > 0, "Category created successfully."))
    }

    async fn update(&self, ctx: &AppContext, cmd: &UpdateCategory) -> Result<Envelope<bool>, AppError> {
        ctx.ensure_active(UpdateCategory::NAME)?;
        let rows = self.repo.update(cmd.id, &cmd.name).await?;
        let message = if rows > 0 { "Category updated successfully." } else { NOT_FOUND };
        Ok(Envelope::success(rows > 0, message))
    }

    async fn delete(&self, ctx: &AppContext, cmd: &DeleteCategory) -> Result<Envelope<bool>, AppError> {
        ctx.ensure_active(DeleteCategory::NAME)?;
        let rows = self.repo.delete(cmd.id).await?;
        let message = if rows > 0 { "Category deleted successfully." } else { NOT_FOUND };
        Ok(Envelope::success(rows > 0, message))
    }

    async fn get_by_id(&self, ctx: &AppContext, q: &GetCategoryById) -> Result<Envelope<Category>, AppError> {
        ctx.ensure_active(GetCategoryById::NAME)?;
        Ok(match self.repo.find_by_id(q.id).await? {
            Some(category) => Envelope::success(category, "Category found."),
            None => Envelope::empty(NOT_FOUND),
        })
    }

    async fn get_all(&self, ctx: &AppContext) -> Result<Envelope<Vec<Category>>, AppError> {
        ctx.ensure_active(GetAllCategories::NAME)?;
        let all = self.repo.find_all().await?;
        Ok(Envelope::success(all, "Categories retrieved successfully."))
    }
}

#[async_trait]
impl CommandHandler<CreateCategory> for CategoryHandlers {
    async fn handle(&self, ctx: &AppContext, cmd: CreateCategory) -> Envelope<bool> {
        self.executor.execute(ctx, &cmd, || self.create(ctx, &cmd)).await
    }
}

#[async_trait]
impl CommandHandler<UpdateCategory> for CategoryHandlers {
    async fn handle(&self, ctx: &AppContext, cmd: UpdateCategory) -> Envelope<bool> {
        self.executor.execute(ctx, &cmd, || self.update(ctx, &cmd)).await
    }
}

#[async_trait]
impl CommandHandler<DeleteCategory> for CategoryHandlers {
    async fn handle(&self, ctx: &AppContext, cmd: DeleteCategory) -> Envelope<bool> {
        self.executor.execute(ctx, &cmd, || self.delete(ctx, &cmd)).await
    }
}

#[async_trait]
impl QueryHandler<GetCategoryById> for CategoryHandlers {
    async fn handle(&self, ctx: &AppContext, q: GetCategoryById) -> Envelope<Category> {
        self.executor.execute(ctx, &q, || self.get_by_id(ctx, &q)).await
    }
}

#[async_trait]
impl QueryHandler<GetAllCategories> for CategoryHandlers {
    async fn handle(&self, ctx: &AppContext, q: GetAllCategories) -> Envelope<Vec<Category>> {
        self.executor.execute(ctx, &q, || self.get_all(ctx)).await
    }
}
