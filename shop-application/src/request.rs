//! 请求（Request）与请求类别
//!
//! 每个请求类型在定义时静态关联唯一的响应载荷类型，并声明自己的类别
//! （命令或查询）。类别从不根据请求内容在运行时推断。
//!
use crate::dto::Dto;
use std::fmt;

/// 请求类别
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestKind {
    Command,
    Query,
}

impl RequestKind {
    /// 从声明的类别中选出用于分发的那一个
    ///
    /// 命令优先于查询，首个匹配生效；未声明任何类别时返回 `None`。
    pub fn classify(kinds: &[RequestKind]) -> Option<RequestKind> {
        if kinds.contains(&RequestKind::Command) {
            Some(RequestKind::Command)
        } else if kinds.contains(&RequestKind::Query) {
            Some(RequestKind::Query)
        } else {
            None
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 应用层请求
///
/// 通常由 `#[command(..)]` / `#[query(..)]` 宏实现；同时具备两种能力的类型
/// 需要手写实现并在 `KINDS` 中列出两者。
pub trait Request: fmt::Debug + Send + Sync + 'static {
    /// 请求的稳定名称（用于日志与追踪，不随重构变化）
    const NAME: &'static str;

    /// 声明的类别
    const KINDS: &'static [RequestKind];

    /// 关联的响应载荷类型
    type Response: Dto;
}
