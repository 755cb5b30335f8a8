use crate::entity::{EntityId, Order, OrderLine, OrderState};
use crate::error::DomainResult;
use crate::value_object::Money;
use async_trait::async_trait;

/// 对已有订单明细的整行改写（`price` 为行金额）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderDetailChange {
    pub detail_id: EntityId,
    pub product_id: EntityId,
    pub quantity: u32,
    pub price: Money,
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// 写入订单头与明细，返回新订单标识
    ///
    /// 明细的 `price` 存储为行金额（单价 x 数量）。
    async fn insert(
        &self,
        user_id: EntityId,
        state: OrderState,
        total: Money,
        lines: &[OrderLine],
    ) -> DomainResult<EntityId>;

    /// 刷新下单时间并改写给定明细，返回受影响的订单行数（0 表示订单不存在）
    async fn update(&self, order_id: EntityId, details: &[OrderDetailChange])
    -> DomainResult<u64>;

    async fn update_state(&self, order_id: EntityId, state: OrderState) -> DomainResult<u64>;

    /// 删除订单及其明细
    async fn delete(&self, order_id: EntityId) -> DomainResult<u64>;

    /// 读取订单（含明细）
    async fn find_by_id(&self, order_id: EntityId) -> DomainResult<Option<Order>>;

    /// 按标识升序返回全部订单（含明细）
    async fn find_all(&self) -> DomainResult<Vec<Order>>;
}
