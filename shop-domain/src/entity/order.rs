use super::{Entity, EntityId};
use crate::error::DomainResult;
use crate::value_object::Money;
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 订单状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 下单时的一行：商品、数量与单价
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: EntityId,
    pub quantity: u32,
    pub unit_price: Money,
}

impl OrderLine {
    /// 行金额 = 单价 x 数量
    pub fn amount(&self) -> DomainResult<Money> {
        self.unit_price.times(self.quantity)
    }
}

/// 订单明细（持久化形态，`price` 为行金额）
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: EntityId,
    pub order_id: EntityId,
    pub product_id: EntityId,
    pub quantity: u32,
    pub price: Money,
}

/// 订单
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    #[builder(default = Utc::now())]
    pub order_date: DateTime<Utc>,
    #[builder(default)]
    pub state: OrderState,
    pub user_id: EntityId,
    pub total: Money,
    #[builder(default)]
    pub details: Vec<OrderDetail>,
}

impl Order {
    /// 订单总额 = 各行金额之和，任何一步溢出都返回领域错误
    pub fn total_of<'a>(lines: impl IntoIterator<Item = &'a OrderLine>) -> DomainResult<Money> {
        lines
            .into_iter()
            .try_fold(Money::ZERO, |acc, line| acc.checked_add(line.amount()?))
    }
}

impl Entity for Order {
    const TYPE: &'static str = "order";
    type Id = EntityId;

    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    fn line(quantity: u32, cents: i64) -> OrderLine {
        OrderLine {
            product_id: 1,
            quantity,
            unit_price: Money::from_minor(cents),
        }
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let lines = [line(2, 1050), line(1, 399), line(3, 100)];
        assert_eq!(Order::total_of(&lines).unwrap(), Money::from_minor(2799));
    }

    #[test]
    fn total_of_no_lines_is_zero() {
        assert_eq!(Order::total_of(&[]).unwrap(), Money::ZERO);
    }

    #[test]
    fn total_overflow_is_domain_error() {
        let lines = [line(1, i64::MAX), line(1, 1)];
        match Order::total_of(&lines).unwrap_err() {
            DomainError::AmountOverflow { .. } => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn order_state_text_matches_the_wire_name() {
        for state in [
            OrderState::Pending,
            OrderState::Confirmed,
            OrderState::Shipped,
            OrderState::Delivered,
            OrderState::Cancelled,
        ] {
            let wire = serde_json::to_value(state).unwrap();
            assert_eq!(wire, serde_json::Value::from(state.to_string()));
        }
        let shipped: OrderState = serde_json::from_str("\"SHIPPED\"").unwrap();
        assert_eq!(shipped, OrderState::Shipped);
    }
}
