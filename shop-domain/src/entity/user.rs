use super::{Entity, EntityId};
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 用户类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    #[default]
    Customer,
    Seller,
    Admin,
}

/// 用户
///
/// 密码字段只在写入路径使用，永不序列化输出。
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    #[builder(into)]
    pub username: String,
    #[serde(skip_serializing, default)]
    #[builder(into)]
    pub password: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    #[builder(into)]
    pub email: String,
    pub address: Option<String>,
    pub cellphone: Option<String>,
    #[builder(default)]
    pub user_type: UserType,
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for User {
    const TYPE: &'static str = "user";
    type Id = EntityId;

    fn id(&self) -> EntityId {
        self.id
    }
}
