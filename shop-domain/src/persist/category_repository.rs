use crate::entity::{Category, EntityId};
use crate::error::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, name: &str) -> DomainResult<u64>;

    async fn update(&self, id: EntityId, name: &str) -> DomainResult<u64>;

    async fn delete(&self, id: EntityId) -> DomainResult<u64>;

    async fn find_by_id(&self, id: EntityId) -> DomainResult<Option<Category>>;

    /// 按标识升序返回全部分类
    async fn find_all(&self) -> DomainResult<Vec<Category>>;
}
