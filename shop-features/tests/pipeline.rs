use async_trait::async_trait;
use shop_application::{AppContext, AppError, Dispatcher, Pipeline, command};
use shop_domain::entity::{Category, EntityId};
use shop_domain::error::{DomainError, DomainResult};
use shop_domain::persist::CategoryRepository;
use shop_features::categories::{CategoriesModule, CreateCategory, GetCategoryById};
use shop_features::in_memory;
use shop_features::store::InMemoryCategories;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// 所有操作都失败的仓储
struct Unreachable;

#[async_trait]
impl CategoryRepository for Unreachable {
    async fn insert(&self, _name: &str) -> DomainResult<u64> {
        Err(DomainError::Database {
            reason: "connection refused".into(),
        })
    }

    async fn update(&self, _id: EntityId, _name: &str) -> DomainResult<u64> {
        Err(DomainError::Database {
            reason: "connection refused".into(),
        })
    }

    async fn delete(&self, _id: EntityId) -> DomainResult<u64> {
        Err(DomainError::Database {
            reason: "connection refused".into(),
        })
    }

    async fn find_by_id(&self, _id: EntityId) -> DomainResult<Option<Category>> {
        Err(DomainError::Database {
            reason: "connection refused".into(),
        })
    }

    async fn find_all(&self) -> DomainResult<Vec<Category>> {
        Err(DomainError::Database {
            reason: "connection refused".into(),
        })
    }
}

#[command(response = bool)]
#[derive(Debug)]
struct Unrouted;

#[test]
fn installing_a_slice_twice_fails_fast() {
    let repo = Arc::new(InMemoryCategories::default());
    let err = Pipeline::builder()
        .install(CategoriesModule::new(repo.clone()))
        .install(CategoriesModule::new(repo))
        .build()
        .err()
        .unwrap();
    match err {
        AppError::AlreadyRegistered { request, .. } => assert_eq!(request, "CreateCategory"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unregistered_request_is_tagged_dispatcher() {
    let (d, _) = in_memory().unwrap();
    let env = d.dispatch(&AppContext::default(), Unrouted).await;
    assert!(!env.is_success());
    assert_eq!(env.errors().len(), 1);
    assert_eq!(env.errors()[0].field(), Some("Dispatcher"));
    assert!(env.errors()[0].message().contains("Unrouted"));
}

#[tokio::test]
async fn persistence_failure_becomes_one_exception_entry() {
    let d = Pipeline::builder()
        .install(CategoriesModule::new(Arc::new(Unreachable)))
        .build()
        .unwrap();

    let env = d
        .dispatch(&AppContext::default(), CreateCategory { name: "Books".into() })
        .await;
    assert!(!env.is_success());
    assert_eq!(env.message(), Some("an unexpected error occurred"));
    assert_eq!(env.errors().len(), 1);
    assert_eq!(env.errors()[0].field(), Some("Exception"));
    assert!(env.errors()[0].message().contains("connection refused"));
}

#[tokio::test]
async fn validation_still_runs_before_a_broken_store() {
    let d = Pipeline::builder()
        .install(CategoriesModule::new(Arc::new(Unreachable)))
        .build()
        .unwrap();

    let env = d.dispatch(&AppContext::default(), GetCategoryById { id: -3 }).await;
    assert_eq!(env.message(), Some("validation errors"));
    assert_eq!(env.errors()[0].field(), Some("Id"));
}

#[tokio::test]
async fn cancelled_caller_gets_a_failure_and_nothing_is_written() {
    let (d, store) = in_memory().unwrap();
    let token = CancellationToken::new();
    token.cancel();

    let env = d
        .dispatch(&AppContext::with_cancellation(token), CreateCategory { name: "Books".into() })
        .await;
    assert!(!env.is_success());
    assert_eq!(env.errors()[0].field(), Some("Exception"));
    assert!(store.categories.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn every_slice_is_registered() {
    let (d, _) = in_memory().unwrap();
    let names: Vec<_> = d.registry().registered().into_iter().map(|h| h.request).collect();
    for expected in [
        "CreateCategory",
        "GetAllProducts",
        "UpdateOrderState",
        "GetUserByEmail",
    ] {
        assert!(names.contains(&expected), "{expected} missing from {names:?}");
    }
    assert_eq!(d.registry().len(), 19);
}
