use crate::request::Request;

/// 应用层查询（Query）
///
/// 表达只读意图，不改变领域状态。
/// - 响应载荷为 [`Dto`](crate::dto::Dto)；
/// - 与 [`Command`](crate::command::Command) 相对，`Query` 应避免副作用。
pub trait Query: Request {}
