//! 实体（Entity）
//!
//! 商城中具备唯一标识的领域对象：分类、商品、订单、用户。
//! 标识由存储分配（自增整数），新建前的请求对象不携带标识。
//!
mod category;
mod order;
mod product;
mod user;

pub use category::Category;
pub use order::{Order, OrderDetail, OrderLine, OrderState};
pub use product::Product;
pub use user::{User, UserType};

use std::fmt::Display;

/// 存储分配的整数标识
pub type EntityId = i32;

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体类型名（用于日志与错误信息）
    const TYPE: &'static str;

    /// 实体标识类型，要求可显示与可复制
    type Id: Copy + Display;

    /// 获取实体标识
    fn id(&self) -> Self::Id;
}
