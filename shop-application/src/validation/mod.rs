//! 校验协议（validation）
//!
//! 给定一个请求值，找到为其具体类型注册的全部规则集并执行：
//! - 无规则集：直接通过；
//! - 有规则集：并发执行（规则集之间相互独立、无副作用），按注册顺序汇总字段错误；
//! - 汇总非空时返回 [`ValidationFailure`]，否则通过。
//!
//! 规则的定义由各功能模块提供（通常是 [`RuleSet`]），本模块只定义协议。
//!
mod failure;
mod registry;
mod rule_set;
mod service;
mod validator;

pub use failure::ValidationFailure;
pub use registry::{ValidatorRegistry, ValidatorRegistryBuilder};
pub use rule_set::RuleSet;
pub use service::ValidationService;
pub use validator::{ValidationContext, Validator};
