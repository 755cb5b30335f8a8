//! 内存存储适配器
//!
//! 以 `DashMap` 保存各实体、以原子计数器分配自增标识，实现 `shop-domain`
//! 中的全部仓储端口。用于演示程序与测试，不提供持久性。
//!
mod categories;
mod orders;
mod products;
mod users;

pub use categories::InMemoryCategories;
pub use orders::InMemoryOrders;
pub use products::InMemoryProducts;
pub use users::InMemoryUsers;

use dashmap::DashMap;
use shop_domain::entity::{Entity, EntityId};
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

/// 全部仓储的内存实现
#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub categories: Arc<InMemoryCategories>,
    pub products: Arc<InMemoryProducts>,
    pub orders: Arc<InMemoryOrders>,
    pub users: Arc<InMemoryUsers>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 自增标识序列，从 1 开始
#[derive(Debug, Default)]
pub(crate) struct Sequence(AtomicI32);

impl Sequence {
    pub(crate) fn next(&self) -> EntityId {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// 按标识升序复制出全部行
pub(crate) fn sorted_rows<E>(rows: &DashMap<EntityId, E>) -> Vec<E>
where
    E: Entity<Id = EntityId> + Clone,
{
    let mut all: Vec<E> = rows.iter().map(|r| r.value().clone()).collect();
    all.sort_by_key(|e| e.id());
    tracing::trace!(target: "shop::store", entity = E::TYPE, rows = all.len(), "listed");
    all
}
