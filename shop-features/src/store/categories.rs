use super::{Sequence, sorted_rows};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use shop_domain::entity::{Category, EntityId};
use shop_domain::error::DomainResult;
use shop_domain::persist::CategoryRepository;

#[derive(Debug, Default)]
pub struct InMemoryCategories {
    rows: DashMap<EntityId, Category>,
    seq: Sequence,
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn insert(&self, name: &str) -> DomainResult<u64> {
        let id = self.seq.next();
        let category = Category::builder().id(id).name(name).build();
        self.rows.insert(id, category);
        Ok(1)
    }

    async fn update(&self, id: EntityId, name: &str) -> DomainResult<u64> {
        let Some(mut row) = self.rows.get_mut(&id) else {
            return Ok(0);
        };
        row.name = name.to_string();
        row.updated_at = Some(Utc::now());
        Ok(1)
    }

    async fn delete(&self, id: EntityId) -> DomainResult<u64> {
        Ok(self.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn find_by_id(&self, id: EntityId) -> DomainResult<Option<Category>> {
        Ok(self.rows.get(&id).map(|r| r.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Category>> {
        Ok(sorted_rows(&self.rows))
    }
}
