use super::{Sequence, sorted_rows};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use shop_domain::entity::{EntityId, Product};
use shop_domain::error::DomainResult;
use shop_domain::persist::{ProductDraft, ProductRepository};

#[derive(Debug, Default)]
pub struct InMemoryProducts {
    rows: DashMap<EntityId, Product>,
    seq: Sequence,
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn insert(&self, draft: ProductDraft) -> DomainResult<u64> {
        let id = self.seq.next();
        let product = Product::builder()
            .id(id)
            .name(draft.name)
            .code(draft.code)
            .maybe_description(draft.description)
            .maybe_url_image(draft.url_image)
            .price(draft.price)
            .user_id(draft.user_id)
            .category_id(draft.category_id)
            .build();
        self.rows.insert(id, product);
        Ok(1)
    }

    async fn update(&self, id: EntityId, draft: ProductDraft) -> DomainResult<u64> {
        let Some(mut row) = self.rows.get_mut(&id) else {
            return Ok(0);
        };
        row.name = draft.name;
        row.code = draft.code;
        row.description = draft.description;
        row.url_image = draft.url_image;
        row.price = draft.price;
        row.user_id = draft.user_id;
        row.category_id = draft.category_id;
        row.updated_at = Some(Utc::now());
        Ok(1)
    }

    async fn delete(&self, id: EntityId) -> DomainResult<u64> {
        Ok(self.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn find_by_id(&self, id: EntityId) -> DomainResult<Option<Product>> {
        Ok(self.rows.get(&id).map(|r| r.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        Ok(sorted_rows(&self.rows))
    }
}
