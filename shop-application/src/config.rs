use bon::Builder;

pub const DEFAULT_VALIDATION_MESSAGE: &str = "validation errors";
pub const DEFAULT_UNEXPECTED_MESSAGE: &str = "an unexpected error occurred";
pub const DEFAULT_DISPATCH_FAILURE_MESSAGE: &str = "an error occurred while processing the request";

/// 请求管线配置
///
/// 信封中面向用户的固定文案与校验并发度都在这里集中配置。
#[derive(Builder, Clone, Debug)]
pub struct PipelineConfig {
    /// 同一请求的规则集最多并发执行的数量
    #[builder(default = 8)]
    pub validation_concurrency: usize,
    /// 校验失败信封的 message
    #[builder(into, default = DEFAULT_VALIDATION_MESSAGE.to_string())]
    pub validation_message: String,
    /// 业务动作故障信封的 message
    #[builder(into, default = DEFAULT_UNEXPECTED_MESSAGE.to_string())]
    pub unexpected_message: String,
    /// 分发器兜底信封的 message
    #[builder(into, default = DEFAULT_DISPATCH_FAILURE_MESSAGE.to_string())]
    pub dispatch_failure_message: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
