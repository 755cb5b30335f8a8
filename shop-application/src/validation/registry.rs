use super::validator::Validator;
use crate::error::AppError;
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

type BoxAnySendSync = Box<dyn Any + Send + Sync>;

struct Entry {
    type_name: &'static str,
    // 实际类型为 Vec<Arc<dyn Validator<T>>>，T 即键对应的类型
    validators: BoxAnySendSync,
    len: usize,
}

/// 启动期收集规则集的可变构建器
#[derive(Default)]
pub struct ValidatorRegistryBuilder {
    entries: HashMap<TypeId, Entry>,
}

impl ValidatorRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为类型 `T` 追加一个规则集；同一类型可注册多个，执行与汇总顺序即注册顺序
    pub fn add<T, V>(&mut self, validator: V) -> Result<&mut Self, AppError>
    where
        T: Send + Sync + 'static,
        V: Validator<T> + 'static,
    {
        let entry = self.entries.entry(TypeId::of::<T>()).or_insert_with(|| Entry {
            type_name: type_name::<T>(),
            validators: Box::new(Vec::<Arc<dyn Validator<T>>>::new()),
            len: 0,
        });

        // 正常情况下这里的 downcast 永远不会失败（键与列表同一泛型 T）
        let Some(list) = entry
            .validators
            .downcast_mut::<Vec<Arc<dyn Validator<T>>>>()
        else {
            return Err(AppError::TypeMismatch {
                expected: type_name::<Vec<Arc<dyn Validator<T>>>>(),
                found: "unknown",
            });
        };
        list.push(Arc::new(validator));
        entry.len = list.len();

        Ok(self)
    }

    /// 冻结为只读注册表
    pub fn build(self) -> ValidatorRegistry {
        ValidatorRegistry {
            entries: self.entries,
        }
    }
}

/// 只读的规则集注册表：类型 -> 有序规则集列表
pub struct ValidatorRegistry {
    entries: HashMap<TypeId, Entry>,
}

impl ValidatorRegistry {
    pub fn builder() -> ValidatorRegistryBuilder {
        ValidatorRegistryBuilder::new()
    }

    /// 类型 `T` 的规则集；未注册时为空切片
    pub fn validators_for<T>(&self) -> &[Arc<dyn Validator<T>>]
    where
        T: Send + Sync + 'static,
    {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|e| e.validators.downcast_ref::<Vec<Arc<dyn Validator<T>>>>())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 已注册的 (类型名, 规则集数量)，按类型名排序
    pub fn registered(&self) -> Vec<(&'static str, usize)> {
        let mut out: Vec<_> = self.entries.values().map(|e| (e.type_name, e.len)).collect();
        out.sort_unstable();
        out
    }
}
