use serde::Serialize;

/// 数据传输对象（DTO）
///
/// - 作为应用层的输出载体，面向接口/外部系统序列化友好；
/// - 与领域模型解耦，避免将领域对象直接暴露到接口层。
///
/// 任何可序列化、可跨线程的类型都自动是 DTO（包括 `bool`、`Vec<T>` 等）。
pub trait Dto: Serialize + Send + Sync + 'static {}

impl<T> Dto for T where T: Serialize + Send + Sync + 'static {}
