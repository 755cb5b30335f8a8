//! 电商领域层（shop-domain）
//!
//! 提供商城后端的领域模型与端口定义：
//! - 实体（`entity`）：分类、商品、订单（含明细）、用户
//! - 值对象（`value_object`）：金额 `Money`
//! - 规约（`specification`）：可组合的业务断言，供应用层校验规则复用
//! - 仓储端口（`persist`）：各实体的持久化接口，由基础设施层提供实现
//!
//! 本 crate 不依赖任何具体存储或传输实现，仅定义领域接口与最小必要的错误类型。
//!
pub mod entity;
pub mod error;
pub mod persist;
pub mod specification;
pub mod value_object;
