use super::{Entity, EntityId};
use crate::value_object::Money;
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 商品
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    #[builder(into)]
    pub name: String,
    /// 商品编码（SKU）
    #[builder(into)]
    pub code: String,
    pub description: Option<String>,
    pub url_image: Option<String>,
    pub price: Money,
    /// 上架该商品的用户
    pub user_id: EntityId,
    pub category_id: EntityId,
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Product {
    const TYPE: &'static str = "product";
    type Id = EntityId;

    fn id(&self) -> EntityId {
        self.id
    }
}
