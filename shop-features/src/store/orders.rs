use super::{Sequence, sorted_rows};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use shop_domain::entity::{EntityId, Order, OrderDetail, OrderLine, OrderState};
use shop_domain::error::DomainResult;
use shop_domain::persist::{OrderDetailChange, OrderRepository};
use shop_domain::value_object::Money;

/// 订单头与明细保存在一起，删除订单即删除其明细
#[derive(Debug, Default)]
pub struct InMemoryOrders {
    rows: DashMap<EntityId, Order>,
    orders: Sequence,
    details: Sequence,
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn insert(
        &self,
        user_id: EntityId,
        state: OrderState,
        total: Money,
        lines: &[OrderLine],
    ) -> DomainResult<EntityId> {
        let id = self.orders.next();
        let details = lines
            .iter()
            .map(|line| {
                Ok(OrderDetail::builder()
                    .id(self.details.next())
                    .order_id(id)
                    .product_id(line.product_id)
                    .quantity(line.quantity)
                    .price(line.amount()?)
                    .build())
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let order = Order::builder()
            .id(id)
            .state(state)
            .user_id(user_id)
            .total(total)
            .details(details)
            .build();
        self.rows.insert(id, order);
        Ok(id)
    }

    /// 只改写属于该订单的明细，其余标识被忽略；总额按改写后的明细重新汇总
    async fn update(
        &self,
        order_id: EntityId,
        details: &[OrderDetailChange],
    ) -> DomainResult<u64> {
        let Some(mut order) = self.rows.get_mut(&order_id) else {
            return Ok(0);
        };

        for change in details {
            if let Some(detail) = order.details.iter_mut().find(|d| d.id == change.detail_id) {
                detail.product_id = change.product_id;
                detail.quantity = change.quantity;
                detail.price = change.price;
            }
        }
        order.total = order
            .details
            .iter()
            .try_fold(Money::ZERO, |acc, d| acc.checked_add(d.price))?;
        order.order_date = Utc::now();
        Ok(1)
    }

    async fn update_state(&self, order_id: EntityId, state: OrderState) -> DomainResult<u64> {
        let Some(mut order) = self.rows.get_mut(&order_id) else {
            return Ok(0);
        };
        order.state = state;
        Ok(1)
    }

    async fn delete(&self, order_id: EntityId) -> DomainResult<u64> {
        Ok(self.rows.remove(&order_id).map_or(0, |_| 1))
    }

    async fn find_by_id(&self, order_id: EntityId) -> DomainResult<Option<Order>> {
        Ok(self.rows.get(&order_id).map(|r| r.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Order>> {
        Ok(sorted_rows(&self.rows))
    }
}
