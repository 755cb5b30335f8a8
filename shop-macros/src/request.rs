use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    Ident, Item, LitStr, Result as SynResult, Token, Type, parse::Parse, parse::ParseStream,
    spanned::Spanned,
};

// 解析请求宏键值参数：response = <Type>, name = "<literal>"
pub(crate) struct RequestAttrConfig {
    response: Option<Type>,
    name: Option<LitStr>,
}

impl Parse for RequestAttrConfig {
    fn parse(input: ParseStream) -> SynResult<Self> {
        let mut response: Option<Type> = None;
        let mut name: Option<LitStr> = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            let _eq: Token![=] = input.parse()?;
            match key.to_string().as_str() {
                "response" => {
                    if response.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'response' in attribute",
                        ));
                    }
                    response = Some(input.parse()?);
                }
                "name" => {
                    if name.is_some() {
                        return Err(syn::Error::new(key.span(), "duplicate key 'name' in attribute"));
                    }
                    name = Some(input.parse()?);
                }
                _ => {
                    return Err(syn::Error::new(
                        key.span(),
                        "unknown key in attribute; expected 'response' | 'name'",
                    ));
                }
            }

            if input.is_empty() {
                break;
            }
            let _comma: Token![,] = input.parse()?;
        }

        Ok(Self { response, name })
    }
}

/// 生成 `Request` 与类别标记 trait 的实现；`kind` 为 "command" 或 "query"
pub(crate) fn expand_request(
    kind: &str,
    cfg: RequestAttrConfig,
    item: TokenStream2,
) -> SynResult<TokenStream2> {
    let input: Item = syn::parse2(item)?;

    let (ident, generics) = match &input {
        Item::Struct(s) => (&s.ident, &s.generics),
        Item::Enum(e) => (&e.ident, &e.generics),
        other => {
            return Err(syn::Error::new(
                other.span(),
                format!("#[{kind}] only on struct or enum"),
            ));
        }
    };

    let Some(response) = cfg.response else {
        return Err(syn::Error::new(
            Span::call_site(),
            format!("#[{kind}] requires `response = <Type>`"),
        ));
    };

    let name = cfg
        .name
        .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));

    let (variant, marker) = match kind {
        "command" => (quote!(Command), quote!(::shop_application::command::Command)),
        _ => (quote!(Query), quote!(::shop_application::query::Query)),
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #input

        impl #impl_generics ::shop_application::request::Request for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            const KINDS: &'static [::shop_application::request::RequestKind] =
                &[::shop_application::request::RequestKind::#variant];
            type Response = #response;
        }

        impl #impl_generics #marker for #ident #ty_generics #where_clause {}
    })
}
