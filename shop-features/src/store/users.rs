use super::Sequence;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shop_domain::entity::{EntityId, User};
use shop_domain::error::{DomainError, DomainResult};
use shop_domain::persist::{NewUser, UserRepository};

#[derive(Debug, Default)]
pub struct InMemoryUsers {
    rows: DashMap<EntityId, User>,
    // 小写邮箱 -> 用户标识；先占用邮箱再写入行
    emails: DashMap<String, EntityId>,
    seq: Sequence,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    /// 邮箱唯一（不区分大小写），重复时返回 `InvalidState`
    async fn insert(&self, user: NewUser) -> DomainResult<u64> {
        let id = match self.emails.entry(user.email.to_lowercase()) {
            Entry::Occupied(_) => {
                return Err(DomainError::InvalidState {
                    reason: format!("email already registered: {}", user.email),
                });
            }
            Entry::Vacant(slot) => {
                let id = self.seq.next();
                slot.insert(id);
                id
            }
        };

        let row = User::builder()
            .id(id)
            .username(user.username)
            .password(user.password)
            .maybe_firstname(user.firstname)
            .maybe_lastname(user.lastname)
            .email(user.email)
            .maybe_address(user.address)
            .maybe_cellphone(user.cellphone)
            .user_type(user.user_type)
            .build();
        self.rows.insert(id, row);
        Ok(1)
    }

    async fn find_by_id(&self, id: EntityId) -> DomainResult<Option<User>> {
        Ok(self.rows.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let Some(id) = self.emails.get(&email.to_lowercase()).map(|r| *r.value()) else {
            return Ok(None);
        };
        Ok(self.rows.get(&id).map(|r| r.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser::builder()
            .username("ana")
            .password("s3cret")
            .email(email)
            .build()
    }

    #[tokio::test]
    async fn email_lookup_ignores_case() {
        let repo = InMemoryUsers::default();
        repo.insert(new_user("Ana@Example.com")).await.unwrap();

        let found = repo.find_by_email("ana@example.COM").await.unwrap().unwrap();
        assert_eq!(found.id, 1);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = InMemoryUsers::default();
        repo.insert(new_user("ana@example.com")).await.unwrap();

        let err = repo.insert(new_user("ANA@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidState { .. }));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_registrations_claim_an_email_once() {
        let repo = std::sync::Arc::new(InMemoryUsers::default());
        let barrier = std::sync::Arc::new(tokio::sync::Barrier::new(8));
        let mut set = tokio::task::JoinSet::new();
        for n in 0..8 {
            let repo = repo.clone();
            let barrier = barrier.clone();
            set.spawn(async move {
                barrier.wait().await;
                let email = if n % 2 == 0 { "race@example.com" } else { "RACE@example.com" };
                repo.insert(new_user(email)).await.is_ok()
            });
        }

        let mut winners = 0;
        while let Some(won) = set.join_next().await {
            if won.unwrap() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
        assert!(repo.find_by_email("race@example.com").await.unwrap().is_some());
    }
}
