use serde::Deserialize;
use shop_application::{command, query};
use shop_domain::entity::{EntityId, Order, OrderLine, OrderState};
use shop_domain::error::DomainResult;
use shop_domain::persist::OrderDetailChange;
use shop_domain::value_object::Money;

/// 下单明细：`price` 为单价
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NewOrderDetail {
    pub product_id: EntityId,
    pub quantity: u32,
    pub price: Money,
}

impl From<&NewOrderDetail> for OrderLine {
    fn from(d: &NewOrderDetail) -> Self {
        OrderLine {
            product_id: d.product_id,
            quantity: d.quantity,
            unit_price: d.price,
        }
    }
}

/// 改写已有明细：`price` 为单价
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OrderDetailUpdate {
    pub detail_id: EntityId,
    pub product_id: EntityId,
    pub quantity: u32,
    pub price: Money,
}

impl OrderDetailUpdate {
    pub(crate) fn change(&self) -> DomainResult<OrderDetailChange> {
        Ok(OrderDetailChange {
            detail_id: self.detail_id,
            product_id: self.product_id,
            quantity: self.quantity,
            price: self.price.times(self.quantity)?,
        })
    }
}

#[command(response = bool)]
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub user_id: EntityId,
    pub details: Vec<NewOrderDetail>,
}

#[command(response = bool)]
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrder {
    pub order_id: EntityId,
    pub details: Vec<OrderDetailUpdate>,
}

#[command(response = bool)]
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderState {
    pub order_id: EntityId,
    pub state: OrderState,
}

#[command(response = bool)]
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteOrder {
    pub order_id: EntityId,
}

#[query(response = Order)]
#[derive(Debug, Clone, Deserialize)]
pub struct GetOrderById {
    pub order_id: EntityId,
}

#[query(response = Vec<Order>)]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetAllOrders;
