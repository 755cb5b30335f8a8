use crate::{context::AppContext, envelope::Envelope, request::Request};
use async_trait::async_trait;

/// 请求分发器（Dispatcher）
///
/// - 管线唯一的对外入口：按请求的声明类别与具体类型路由到唯一的处理器；
/// - 处理器的信封原样返回；
/// - 解析、分类或处理器本身的任何故障都在这里转为失败信封，绝不越过边界。
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch<R>(&self, ctx: &AppContext, request: R) -> Envelope<R::Response>
    where
        R: Request;
}
