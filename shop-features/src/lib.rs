//! 商城功能切片（shop-features）
//!
//! 每个切片包含请求类型、规则集、处理器与一个 [`HandlerModule`]：
//! [`categories`]、[`products`]、[`orders`]、[`users`]。
//! [`store`] 提供全部仓储端口的内存实现。
//!
pub mod categories;
pub mod orders;
pub mod products;
pub mod store;
pub mod users;

use shop_application::{AppError, InProcessDispatcher, Pipeline, PipelineConfig};
use store::InMemoryStore;

/// 以给定存储装配全部功能切片
pub fn bootstrap(store: &InMemoryStore, config: PipelineConfig) -> Result<InProcessDispatcher, AppError> {
    Pipeline::builder()
        .config(config)
        .install(categories::CategoriesModule::new(store.categories.clone()))
        .install(products::ProductsModule::new(store.products.clone()))
        .install(orders::OrdersModule::new(store.orders.clone()))
        .install(users::UsersModule::new(store.users.clone()))
        .build()
}

/// 使用全新的内存存储与默认配置装配
pub fn in_memory() -> Result<(InProcessDispatcher, InMemoryStore), AppError> {
    let store = InMemoryStore::new();
    let dispatcher = bootstrap(&store, PipelineConfig::default())?;
    Ok((dispatcher, store))
}
