use super::requests::{
    CreateOrder, DeleteOrder, GetAllOrders, GetOrderById, UpdateOrder, UpdateOrderState,
};
use async_trait::async_trait;
use shop_application::command_handler::CommandHandler;
use shop_application::query_handler::QueryHandler;
use shop_application::request::Request;
use shop_application::{AppContext, AppError, Envelope, HandlerExecutor};
use shop_domain::entity::{Order, OrderLine, OrderState};
use shop_domain::error::DomainResult;
use shop_domain::persist::OrderRepository;
use std::sync::Arc;
use tracing::debug;

const NOT_FOUND: &str = "Order not found.";

#[derive(Clone)]
pub struct OrderHandlers {
    repo: Arc<dyn OrderRepository>,
    executor: Arc<HandlerExecutor>,
}

impl OrderHandlers {
    pub fn new(repo: Arc<dyn OrderRepository>, executor: Arc<HandlerExecutor>) -> Self {
        Self { repo, executor }
    }

    /// 总额在领域层计算，新订单直接进入已确认状态
    async fn create(&self, ctx: &AppContext, cmd: &CreateOrder) -> Result<Envelope<bool>, AppError> {
        let lines: Vec<OrderLine> = cmd.details.iter().map(OrderLine::from).collect();
        let total = Order::total_of(&lines)?;

        ctx.ensure_active(CreateOrder::NAME)?;
        let id = self
            .repo
            .insert(cmd.user_id, OrderState::Confirmed, total, &lines)
            .await?;
        debug!(target: "shop::orders", order_id = id, %total, "order created");
        Ok(Envelope::success(true, "Order created successfully."))
    }

    async fn update(&self, ctx: &AppContext, cmd: &UpdateOrder) -> Result<Envelope<bool>, AppError> {
        let changes = cmd
            .details
            .iter()
            .map(|d| d.change())
            .collect::<DomainResult<Vec<_>>>()?;

        ctx.ensure_active(UpdateOrder::NAME)?;
        let rows = self.repo.update(cmd.order_id, &changes).await?;
        let message = if rows > 0 { "Order updated successfully." } else { NOT_FOUND };
        Ok(Envelope::success(rows > 0, message))
    }

    async fn update_state(&self, ctx: &AppContext, cmd: &UpdateOrderState) -> Result<Envelope<bool>, AppError> {
        ctx.ensure_active(UpdateOrderState::NAME)?;
        let rows = self.repo.update_state(cmd.order_id, cmd.state).await?;
        debug!(target: "shop::orders", order_id = cmd.order_id, state = %cmd.state, rows, "order state changed");
        let message = if rows > 0 { "Order state updated successfully." } else { NOT_FOUND };
        Ok(Envelope::success(rows > 0, message))
    }

    async fn delete(&self, ctx: &AppContext, cmd: &DeleteOrder) -> Result<Envelope<bool>, AppError> {
        ctx.ensure_active(DeleteOrder::NAME)?;
        let rows = self.repo.delete(cmd.order_id).await?;
        let message = if rows > 0 { "Order deleted successfully." } else { NOT_FOUND };
        Ok(Envelope::success(rows > 0, message))
    }

    async fn get_by_id(&self, ctx: &AppContext, q: &GetOrderById) -> Result<Envelope<Order>, AppError> {
        ctx.ensure_active(GetOrderById::NAME)?;
        Ok(match self.repo.find_by_id(q.order_id).await? {
            Some(order) => Envelope::success(order, "Order retrieved successfully."),
            None => Envelope::empty(NOT_FOUND),
        })
    }

    async fn get_all(&self, ctx: &AppContext) -> Result<Envelope<Vec<Order>>, AppError> {
        ctx.ensure_active(GetAllOrders::NAME)?;
        let all = self.repo.find_all().await?;
        Ok(Envelope::success(all, "Orders retrieved successfully."))
    }
}

#[async_trait]
impl CommandHandler<CreateOrder> for OrderHandlers {
    async fn handle(&self, ctx: &AppContext, cmd: CreateOrder) -> Envelope<bool> {
        self.executor.execute(ctx, &cmd, || self.create(ctx, &cmd)).await
    }
}

#[async_trait]
impl CommandHandler<UpdateOrder> for OrderHandlers {
    async fn handle(&self, ctx: &AppContext, cmd: UpdateOrder) -> Envelope<bool> {
        self.executor.execute(ctx, &cmd, || self.update(ctx, &cmd)).await
    }
}

#[async_trait]
impl CommandHandler<UpdateOrderState> for OrderHandlers {
    async fn handle(&self, ctx: &AppContext, cmd: UpdateOrderState) -> Envelope<bool> {
        self.executor.execute(ctx, &cmd, || self.update_state(ctx, &cmd)).await
    }
}

#[async_trait]
impl CommandHandler<DeleteOrder> for OrderHandlers {
    async fn handle(&self, ctx: &AppContext, cmd: DeleteOrder) -> Envelope<bool> {
        self.executor.execute(ctx, &cmd, || self.delete(ctx, &cmd)).await
    }
}

#[async_trait]
impl QueryHandler<GetOrderById> for OrderHandlers {
    async fn handle(&self, ctx: &AppContext, q: GetOrderById) -> Envelope<Order> {
        self.executor.execute(ctx, &q, || self.get_by_id(ctx, &q)).await
    }
}

#[async_trait]
impl QueryHandler<GetAllOrders> for OrderHandlers {
    async fn handle(&self, ctx: &AppContext, q: GetAllOrders) -> Envelope<Vec<Order>> {
        self.executor.execute(ctx, &q, || self.get_all(ctx)).await
    }
}
