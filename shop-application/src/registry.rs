//! 处理器注册表
//!
//! 启动期通过 [`HandlerRegistryBuilder`] 注册，之后冻结为只读的 [`HandlerRegistry`]，
//! 查找无需加锁。键为 (类别, 请求类型, 响应类型)，每个键恰好一个处理器。
//!
use crate::command::Command;
use crate::command_handler::CommandHandler;
use crate::context::AppContext;
use crate::error::AppError;
use crate::query::Query;
use crate::query_handler::QueryHandler;
use crate::request::{Request, RequestKind};
use std::any::{Any, TypeId, type_name, type_name_of_val};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::info;

pub(crate) type BoxAnySend = Box<dyn Any + Send>;

pub(crate) type HandlerFuture<'a> =
    Pin<Box<dyn Future<Output = Result<BoxAnySend, AppError>> + Send + 'a>>;

/// 类型擦除后的处理器：入参为装箱的请求，出参为装箱的 `Envelope<Response>`
pub(crate) type HandlerFn =
    Arc<dyn for<'a> Fn(BoxAnySend, &'a AppContext) -> HandlerFuture<'a> + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct HandlerKey {
    kind: RequestKind,
    request: TypeId,
    response: TypeId,
}

impl HandlerKey {
    fn of<R: Request>(kind: RequestKind) -> Self {
        Self {
            kind,
            request: TypeId::of::<R>(),
            response: TypeId::of::<R::Response>(),
        }
    }
}

struct HandlerEntry {
    request: &'static str,
    response: &'static str,
    call: HandlerFn,
}

/// 已注册处理器的只读描述
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RegisteredHandler {
    pub kind: RequestKind,
    pub request: &'static str,
    pub response: &'static str,
}

/// 启动期使用的可变构建器
#[derive(Default)]
pub struct HandlerRegistryBuilder {
    handlers: HashMap<HandlerKey, HandlerEntry>,
}

impl HandlerRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册命令处理器；同一 (命令, 响应) 已存在时立即报错，不覆盖
    pub fn register_command<C, H>(&mut self, handler: Arc<H>) -> Result<&mut Self, AppError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let call: HandlerFn = Arc::new(move |boxed, ctx| {
            let handler = handler.clone();
            Box::pin(async move {
                let cmd = unbox::<C>(boxed)?;
                let envelope = handler.handle(ctx, cmd).await;
                Ok(Box::new(envelope) as BoxAnySend)
            })
        });
        self.insert::<C>(RequestKind::Command, call)
    }

    /// 注册查询处理器；同一 (查询, 响应) 已存在时立即报错，不覆盖
    pub fn register_query<Q, H>(&mut self, handler: Arc<H>) -> Result<&mut Self, AppError>
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        let call: HandlerFn = Arc::new(move |boxed, ctx| {
            let handler = handler.clone();
            Box::pin(async move {
                let q = unbox::<Q>(boxed)?;
                let envelope = handler.handle(ctx, q).await;
                Ok(Box::new(envelope) as BoxAnySend)
            })
        });
        self.insert::<Q>(RequestKind::Query, call)
    }

    fn insert<R: Request>(&mut self, kind: RequestKind, call: HandlerFn) -> Result<&mut Self, AppError> {
        match self.handlers.entry(HandlerKey::of::<R>(kind)) {
            Entry::Occupied(_) => Err(AppError::AlreadyRegistered {
                kind,
                request: R::NAME,
                response: type_name::<R::Response>(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(HandlerEntry {
                    request: R::NAME,
                    response: type_name::<R::Response>(),
                    call,
                });
                Ok(self)
            }
        }
    }

    /// 冻结为只读注册表
    pub fn build(self) -> HandlerRegistry {
        let registry = HandlerRegistry {
            handlers: self.handlers,
        };
        info!(target: "shop::registry", handlers = registry.len(), "handler registry built");
        registry
    }
}

fn unbox<R: Request>(boxed: BoxAnySend) -> Result<R, AppError> {
    match boxed.downcast::<R>() {
        Ok(r) => Ok(*r),
        Err(e) => Err(AppError::TypeMismatch {
            expected: type_name::<R>(),
            found: type_name_of_val(&e),
        }),
    }
}

/// 冻结后的处理器注册表
pub struct HandlerRegistry {
    handlers: HashMap<HandlerKey, HandlerEntry>,
}

impl HandlerRegistry {
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::new()
    }

    /// 按类别查找 `R` 的处理器
    pub(crate) fn resolve<R: Request>(&self, kind: RequestKind) -> Result<HandlerFn, AppError> {
        self.handlers
            .get(&HandlerKey::of::<R>(kind))
            .map(|e| e.call.clone())
            .ok_or(AppError::HandlerNotFound {
                kind,
                request: R::NAME,
                response: type_name::<R::Response>(),
            })
    }

    pub fn contains<R: Request>(&self, kind: RequestKind) -> bool {
        self.handlers.contains_key(&HandlerKey::of::<R>(kind))
    }

    /// 已注册的处理器，按 (类别, 请求名, 响应名) 排序
    pub fn registered(&self) -> Vec<RegisteredHandler> {
        let mut out: Vec<_> = self
            .handlers
            .iter()
            .map(|(key, e)| RegisteredHandler {
                kind: key.kind,
                request: e.request,
                response: e.response,
            })
            .collect();
        out.sort();
        out
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
