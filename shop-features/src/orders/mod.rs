//! 订单
//!
//! 下单时按明细计算总额（单价 x 数量）并以已确认状态落库，明细价格存储为行金额。
//! 其余操作：改写明细、变更状态、删除、按标识读取与列出全部订单。
//!
mod handlers;
mod requests;
mod rules;

pub use handlers::OrderHandlers;
pub use requests::{
    CreateOrder, DeleteOrder, GetAllOrders, GetOrderById, NewOrderDetail, OrderDetailUpdate,
    UpdateOrder, UpdateOrderState,
};

use shop_application::registry::HandlerRegistryBuilder;
use shop_application::validation::ValidatorRegistryBuilder;
use shop_application::{AppError, HandlerExecutor, HandlerModule};
use shop_domain::persist::OrderRepository;
use std::sync::Arc;

pub struct OrdersModule {
    repo: Arc<dyn OrderRepository>,
}

impl OrdersModule {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }
}

impl HandlerModule for OrdersModule {
    fn name(&self) -> &'static str {
        "orders"
    }

    fn register_validators(&self, validators: &mut ValidatorRegistryBuilder) -> Result<(), AppError> {
        validators
            .add::<CreateOrder, _>(rules::create_order())?
            .add::<UpdateOrder, _>(rules::update_order())?
            .add::<UpdateOrderState, _>(rules::update_order_state())?
            .add::<DeleteOrder, _>(rules::delete_order())?
            .add::<GetOrderById, _>(rules::get_order_by_id())?;
        Ok(())
    }

    fn register_handlers(
        &self,
        handlers: &mut HandlerRegistryBuilder,
        executor: &Arc<HandlerExecutor>,
    ) -> Result<(), AppError> {
        let h = Arc::new(OrderHandlers::new(self.repo.clone(), executor.clone()));
        handlers
            .register_command::<CreateOrder, _>(h.clone())?
            .register_command::<UpdateOrder, _>(h.clone())?
            .register_command::<UpdateOrderState, _>(h.clone())?
            .register_command::<DeleteOrder, _>(h.clone())?
            .register_query::<GetOrderById, _>(h.clone())?
            .register_query::<GetAllOrders, _>(h)?;
        Ok(())
    }
}
