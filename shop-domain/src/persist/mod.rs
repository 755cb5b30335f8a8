//! 持久化端口（persist）
//!
//! 定义各实体的仓储接口。写操作返回受影响行数（与 SQL 驱动的语义一致），
//! 读操作返回 `Option`/`Vec`，由处理器决定“未找到”的业务语义。
//!
//! 该模块只定义协议，具体存储后端（如 Postgres、内存实现）由上层提供并注入。
//!
mod category_repository;
mod order_repository;
mod product_repository;
mod user_repository;

pub use category_repository::CategoryRepository;
pub use order_repository::{OrderDetailChange, OrderRepository};
pub use product_repository::{ProductDraft, ProductRepository};
pub use user_repository::{NewUser, UserRepository};
