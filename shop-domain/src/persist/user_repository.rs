use crate::entity::{EntityId, User, UserType};
use crate::error::DomainResult;
use async_trait::async_trait;
use bon::Builder;

/// 注册用户时写入的字段集合
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    #[builder(into)]
    pub username: String,
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
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> DomainResult<u64>;

    async fn find_by_id(&self, id: EntityId) -> DomainResult<Option<User>>;

    /// 邮箱比较不区分大小写
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
}
