//! 商品
mod handlers;
mod requests;
mod rules;

pub use handlers::ProductHandlers;
pub use requests::{CreateProduct, DeleteProduct, GetAllProducts, GetProductById, UpdateProduct};

use shop_application::registry::HandlerRegistryBuilder;
use shop_application::validation::ValidatorRegistryBuilder;
use shop_application::{AppError, HandlerExecutor, HandlerModule};
use shop_domain::persist::ProductRepository;
use std::sync::Arc;

pub struct ProductsModule {
    repo: Arc<dyn ProductRepository>,
}

impl ProductsModule {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

impl HandlerModule for ProductsModule {
    fn name(&self) -> &'static str {
        "products"
    }

    fn register_validators(&self, validators: &mut ValidatorRegistryBuilder) -> Result<(), AppError> {
        validators
            .add::<CreateProduct, _>(rules::create_product())?
            .add::<UpdateProduct, _>(rules::update_product())?
            .add::<DeleteProduct, _>(rules::delete_product())?
            .add::<GetProductById, _>(rules::get_product_by_id())?;
        Ok(())
    }

    fn register_handlers(
        &self,
        handlers: &mut HandlerRegistryBuilder,
        executor: &Arc<HandlerExecutor>,
    ) -> Result<(), AppError> {
        let h = Arc::new(ProductHandlers::new(self.repo.clone(), executor.clone()));
        handlers
            .register_command::<CreateProduct, _>(h.clone())?
            .register_command::<UpdateProduct, _>(h.clone())?
            .register_command::<DeleteProduct, _>(h.clone())?
            .register_query::<GetProductById, _>(h.clone())?
            .register_query::<GetAllProducts, _>(h)?;
        Ok(())
    }
}
