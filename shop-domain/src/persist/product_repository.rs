use crate::entity::{EntityId, Product};
use crate::error::DomainResult;
use crate::value_object::Money;
use async_trait::async_trait;
use bon::Builder;

/// 新建/更新商品时写入的字段集合
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub code: String,
    pub description: Option<String>,
    pub url_image: Option<String>,
    pub price: Money,
    pub user_id: EntityId,
    pub category_id: EntityId,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, draft: ProductDraft) -> DomainResult<u64>;

    async fn update(&self, id: EntityId, draft: ProductDraft) -> DomainResult<u64>;

    async fn delete(&self, id: EntityId) -> DomainResult<u64>;

    async fn find_by_id(&self, id: EntityId) -> DomainResult<Option<Product>>;

    /// 按标识升序返回全部商品
    async fn find_all(&self) -> DomainResult<Vec<Product>>;
}
