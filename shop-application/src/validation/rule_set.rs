use super::validator::{ValidationContext, Validator};
use crate::envelope::FieldError;
use async_trait::async_trait;
use shop_domain::specification::Specification;
use std::borrow::Cow;

type Check<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

struct FieldRule<T> {
    field: &'static str,
    message: Cow<'static, str>,
    check: Check<T>,
}

/// 声明式规则集：一组 (字段, 断言, 错误信息)
///
/// 同一字段上的规则互不短路，每条不满足的规则都会产生一条错误。
///
/// ```
/// use shop_application::validation::RuleSet;
/// use shop_domain::specification::{MaxChars, NotBlank};
///
/// #[derive(Debug)]
/// struct Rename {
///     name: String,
/// }
///
/// let rules = RuleSet::<Rename>::new("rename")
///     .rule("Name", |r| r.name.as_str(), NotBlank, "Name is required.")
///     .rule("Name", |r| r.name.as_str(), MaxChars(3), "Name cannot exceed 3 characters.");
///
/// let errors = rules.check(&Rename { name: "Gadgets".into() });
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].message(), "Name cannot exceed 3 characters.");
/// ```
pub struct RuleSet<T> {
    name: &'static str,
    rules: Vec<FieldRule<T>>,
}

impl<T> RuleSet<T>
where
    T: Send + Sync + 'static,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
        }
    }

    /// 以字段访问器 + 规约声明一条规则
    pub fn rule<P, A, S>(
        self,
        field: &'static str,
        accessor: A,
        spec: S,
        message: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        P: ?Sized + 'static,
        A: Fn(&T) -> &P + Send + Sync + 'static,
        S: Specification<P> + 'static,
    {
        self.must(field, move |t| spec.is_satisfied_by(accessor(t)), message)
    }

    /// 以任意谓词声明一条规则（跨字段或集合元素的约束）
    pub fn must<F>(mut self, field: &'static str, predicate: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rules.push(FieldRule {
            field,
            message: message.into(),
            check: Box::new(predicate),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 同步执行全部规则，按声明顺序返回错误
    pub fn check(&self, request: &T) -> Vec<FieldError> {
        self.rules
            .iter()
            .filter(|r| !(r.check)(request))
            .map(|r| FieldError::new(r.field, r.message.as_ref()))
            .collect()
    }
}

#[async_trait]
impl<T> Validator<T> for RuleSet<T>
where
    T: Send + Sync + 'static,
{
    fn name(&self) -> &str {
        self.name
    }

    async fn validate(&self, cx: &ValidationContext<'_, T>) -> Vec<FieldError> {
        self.check(cx.request())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_domain::specification::{MaxChars, NotBlank, Present};

    #[derive(Debug)]
    struct Signup {
        firstname: Option<String>,
        tags: Vec<String>,
    }

    fn rules() -> RuleSet<Signup> {
        RuleSet::<Signup>::new("signup")
            .rule("Firstname", |s| &s.firstname, NotBlank, "Firstname is required.")
            .rule("Firstname", |s| &s.firstname, Present, "Firstname cannot be null.")
            .rule("Firstname", |s| &s.firstname, MaxChars(5), "Firstname cannot exceed 5 characters.")
            .must(
                "Tags",
                |s| s.tags.iter().all(|t| !t.is_empty()),
                "Tags cannot contain empty values.",
            )
    }

    #[test]
    fn rules_on_one_field_do_not_short_circuit() {
        let errors = rules().check(&Signup {
            firstname: None,
            tags: vec![],
        });
        let messages: Vec<_> = errors.iter().map(|e| e.message()).collect();
        assert_eq!(
            messages,
            vec!["Firstname is required.", "Firstname cannot be null."]
        );
    }

    #[test]
    fn valid_input_yields_no_errors() {
        let errors = rules().check(&Signup {
            firstname: Some("Ana".into()),
            tags: vec!["vip".into()],
        });
        assert!(errors.is_empty());
    }

    #[test]
    fn must_reports_its_field() {
        let errors = rules().check(&Signup {
            firstname: Some("Ana".into()),
            tags: vec![String::new()],
        });
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), Some("Tags"));
    }
}
