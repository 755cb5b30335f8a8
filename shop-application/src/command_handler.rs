use crate::{command::Command, context::AppContext, envelope::Envelope};
use async_trait::async_trait;

/// 命令处理器：每个 (命令类型, 响应类型) 对恰好一个
///
/// 处理器不返回错误：处理体委托给 [`HandlerExecutor`](crate::executor::HandlerExecutor)，
/// 所有结果都已归一化为信封。
#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(&self, ctx: &AppContext, cmd: C) -> Envelope<C::Response>;
}
