use tokio::sync::RwLock;
use uuid::Uuid;

use crate::entity::User;
use crate::repository::UserRepository;

/// Keeps the canonical collection in memory. The duplicate check and the
/// append happen under one write lock, so insert is atomic per store.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> lessonhub::Result<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == email) {
            return Err(lessonhub::Error::Conflict(email.to_string()));
        }
        let user = User {
            id: Some(Uuid::new_v4()),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> lessonhub::Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn exists_by_email(&self, email: &str) -> lessonhub::Result<bool> {
        Ok(self.users.read().await.iter().any(|u| u.email == email))
    }
}
