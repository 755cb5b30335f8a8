use proc_macro::TokenStream;
use syn::parse_macro_input;

mod request;

use request::{RequestAttrConfig, expand_request};

/// 命令宏
/// - 为目标类型实现 `::shop_application::request::Request` 与 `::shop_application::command::Command`
/// - 参数：`#[command(response = Ty)]`，可选 `name = "..."`（默认取类型名）
///
/// ```ignore
/// #[command(response = bool)]
/// #[derive(Debug, Deserialize)]
/// pub struct DeleteCategory {
///     pub id: i32,
/// }
/// ```
#[proc_macro_attribute]
pub fn command(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as RequestAttrConfig);
    expand_request("command", cfg, item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// 查询宏
/// - 为目标类型实现 `::shop_application::request::Request` 与 `::shop_application::query::Query`
/// - 参数同 [`command`](macro@command)
#[proc_macro_attribute]
pub fn query(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as RequestAttrConfig);
    expand_request("query", cfg, item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
