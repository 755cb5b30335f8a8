//! 应用层请求分发管线（shop-application）
//!
//! 将任意带类型的命令（Command）或查询（Query）路由到唯一的处理器，
//! 在业务逻辑之前执行校验，并把所有结果统一为响应信封 [`Envelope`]：
//!
//! - `request` / `command` / `query`：请求模型，类别在定义时声明（见 `shop-macros`）；
//! - `registry`：启动期构建、之后只读的处理器注册表，重复注册即报错；
//! - `validation`：按请求的具体类型查找规则集并发执行、聚合字段错误；
//! - `executor`：处理器复用的“校验 → 执行 → 归一化”包装；
//! - `dispatcher`：唯一对外入口，任何故障都不会越过它。
//!
//! 典型用法：
//! 1. 用 `#[command(response = ..)]` / `#[query(response = ..)]` 声明请求类型；
//! 2. 为请求实现 `CommandHandler` / `QueryHandler`，处理体委托给 `HandlerExecutor`；
//! 3. 以 `HandlerModule` 成组注册规则集与处理器；
//! 4. 通过 `Pipeline::builder()` 构建 `InProcessDispatcher` 并调用 `dispatch`。
//!
pub mod command;
pub mod command_handler;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod executor;
pub mod in_process_dispatcher;
pub mod pipeline;
pub mod query;
pub mod query_handler;
pub mod registry;
pub mod request;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use config::PipelineConfig;
pub use context::AppContext;
pub use dispatcher::Dispatcher;
pub use envelope::{Envelope, FieldError, FieldErrors};
pub use error::AppError;
pub use executor::HandlerExecutor;
pub use in_process_dispatcher::InProcessDispatcher;
pub use pipeline::{HandlerModule, Pipeline};
pub use shop_macros::{command, query};

// 允许在本 crate 内部通过 ::shop_application 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::shop_application 路径。
extern crate self as shop_application;
