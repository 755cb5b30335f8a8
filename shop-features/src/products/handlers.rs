use super::requests::{CreateProduct, DeleteProduct, GetAllProducts, GetProductById, UpdateProduct};
use async_trait::async_trait;
use shop_application::command_handler::CommandHandler;
use shop_application::query_handler::QueryHandler;
use shop_application::request::Request;
use shop_application::{AppContext, AppError, Envelope, HandlerExecutor};
use shop_domain::entity::Product;
use shop_domain::persist::ProductRepository;
use std::sync::Arc;

const NOT_FOUND: &str = "Product not found.";

#[derive(Clone)]
pub struct ProductHandlers {
    repo: Arc<dyn ProductRepository>,
    executor: Arc<HandlerExecutor>,
}

impl ProductHandlers {
    pub fn new(repo: Arc<dyn ProductRepository>, executor: Arc<HandlerExecutor>) -> Self {
        Self { repo, executor }
    }

    async fn create(&self, ctx: &AppContext, cmd: &CreateProduct) -> Result<Envelope<bool>, AppError> {
        ctx.ensure_active(CreateProduct::NAME)?;
        let rows = self.repo.insert(cmd.draft()).await?;
        Ok(Envelope::success(rows > 0, "Product created successfully."))
    }

    async fn update(&self, ctx: &AppContext, cmd: &UpdateProduct) -> Result<Envelope<bool>, AppError> {
        ctx.ensure_active(UpdateProduct::NAME)?;
        let rows = self.repo.update(cmd.id, cmd.draft()).await?;
        let message = if rows > 0 { "Product updated successfully." } else { NOT_FOUND };
        Ok(Envelope::success(rows > 0, message))
    }

    async fn delete(&self, ctx: &AppContext, cmd: &DeleteProduct) -> Result<Envelope<bool>, AppError> {
        ctx.ensure_active(DeleteProduct::NAME)?;
        let rows = self.repo.delete(cmd.id).await?;
        let message = if rows > 0 { "Product deleted successfully." } else { NOT_FOUND };
        Ok(Envelope::success(rows > 0, message))
    }

    async fn get_by_id(&self, ctx: &AppContext, q: &GetProductById) -> Result<Envelope<Product>, AppError> {
        ctx.ensure_active(GetProductById::NAME)?;
        Ok(match self.repo.find_by_id(q.id).await? {
            Some(product) => Envelope::success(product, "Product found."),
            None => Envelope::empty(NOT_FOUND),
        })
    }

    async fn get_all(&self, ctx: &AppContext) -> Result<Envelope<Vec<Product>>, AppError> {
        ctx.ensure_active(GetAllProducts::NAME)?;
        let all = self.repo.find_all().await?;
        Ok(Envelope::success(all, "Products retrieved successfully."))
    }
}

#[async_trait]
impl CommandHandler<CreateProduct> for ProductHandlers {
    async fn handle(&self, ctx: &AppContext, cmd: CreateProduct) -> Envelope<bool> {
        self.executor.execute(ctx, &cmd, || self.create(ctx, &cmd)).await
    }
}

#[async_trait]
impl CommandHandler<UpdateProduct> for ProductHandlers {
    async fn handle(&self, ctx: &AppContext, cmd: UpdateProduct) -> Envelope<bool> {
        self.executor.execute(ctx, &cmd, || self.update(ctx, &cmd)).await
    }
}

#[async_trait]
impl CommandHandler<DeleteProduct> for ProductHandlers {
    async fn handle(&self, ctx: &AppContext, cmd: DeleteProduct) -> Envelope<bool> {
        self.executor.execute(ctx, &cmd, || self.delete(ctx, &cmd)).await
    }
}

#[async_trait]
impl QueryHandler<GetProductById> for ProductHandlers {
    async fn handle(&self, ctx: &AppContext, q: GetProductById) -> Envelope<Product> {
        self.executor.execute(ctx, &q, || self.get_by_id(ctx, &q)).await
    }
}

#[async_trait]
impl QueryHandler<GetAllProducts> for ProductHandlers {
    async fn handle(&self, ctx: &AppContext, q: GetAllProducts) -> Envelope<Vec<Product>> {
        self.executor.execute(ctx, &q, || self.get_all(ctx)).await
    }
}
