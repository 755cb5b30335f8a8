use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shop_application::{command, query};
use shop_domain::entity::{EntityId, User, UserType};
use shop_domain::persist::NewUser;

#[command(response = bool)]
#[derive(Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub cellphone: Option<String>,
    #[serde(default)]
    pub user_type: UserType,
}

// 请求会出现在故障日志里，密码不能被打印
impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("username", &self.username)
            .field("password", &"***")
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("email", &self.email)
            .field("user_type", &self.user_type)
            .finish_non_exhaustive()
    }
}

impl CreateUser {
    pub(crate) fn new_user(&self) -> NewUser {
        NewUser::builder()
            .username(self.username.as_str())
            .password(self.password.as_str())
            .maybe_firstname(self.firstname.clone())
            .maybe_lastname(self.lastname.clone())
            .email(self.email.as_str())
            .maybe_address(self.address.clone())
            .maybe_cellphone(self.cellphone.clone())
            .user_type(self.user_type)
            .build()
    }
}

#[query(response = UserResponse)]
#[derive(Debug, Clone, Deserialize)]
pub struct GetUserById {
    pub user_id: EntityId,
}

#[query(response = UserResponse)]
#[derive(Debug, Clone, Deserialize)]
pub struct GetUserByEmail {
    pub email: String,
}

/// 对外的用户视图，不含密码
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub user_id: EntityId,
    pub username: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: String,
    pub address: Option<String>,
    pub cellphone: Option<String>,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            user_id: u.id,
            username: u.username,
            firstname: u.firstname,
            lastname: u.lastname,
            email: u.email,
            address: u.address,
            cellphone: u.cellphone,
            user_type: u.user_type,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
