use super::{Entity, EntityId};
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 商品分类
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    #[builder(into)]
    pub name: String,
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Category {
    const TYPE: &'static str = "category";
    type Id = EntityId;

    fn id(&self) -> EntityId {
        self.id
    }
}
