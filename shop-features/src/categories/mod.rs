//! 商品分类
//!
//! 新建、改名、删除、按标识读取与列出全部分类。
//!
mod handlers;
mod requests;
mod rules;

pub use handlers::CategoryHandlers;
pub use requests::{
    CreateCategory, DeleteCategory, GetAllCategories, GetCategoryById, UpdateCategory,
};

use shop_application::registry::HandlerRegistryBuilder;
use shop_application::validation::ValidatorRegistryBuilder;
use shop_application::{AppError, HandlerExecutor, HandlerModule};
use shop_domain::persist::CategoryRepository;
use std::sync::Arc;

pub struct CategoriesModule {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoriesModule {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }
}

impl HandlerModule for CategoriesModule {
    fn name(&self) -> &'static str {
        "categories"
    }

    fn register_validators(&self, validators: &mut ValidatorRegistryBuilder) -> Result<(), AppError> {
        validators
            .add::<CreateCategory, _>(rules::create_category())?
            .add::<UpdateCategory, _>(rules::update_category())?
            .add::<DeleteCategory, _>(rules::delete_category())?
            .add::<GetCategoryById, _>(rules::get_category_by_id())?;
        Ok(())
    }

    fn register_handlers(
        &self,
        handlers: &mut HandlerRegistryBuilder,
        executor: &Arc<HandlerExecutor>,
    ) -> Result<(), AppError> {
        let h = Arc::new(CategoryHandlers::new(self.repo.clone(), executor.clone()));
        handlers
            .register_command::<CreateCategory, _>(h.clone())?
            .register_command::<UpdateCategory, _>(h.clone())?
            .register_command::<DeleteCategory, _>(h.clone())?
            .register_query::<GetCategoryById, _>(h.clone())?
            .register_query::<GetAllCategories, _>(h)?;
        Ok(())
    }
}
