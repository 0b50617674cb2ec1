use std::sync::Arc;

use serde::Deserialize;

use crate::entity::User;
use crate::repository::UserRepository;

/// Registration input as it arrives off the wire. Fields are optional at the
/// parse level so a missing field and an empty field report the same
/// validation failure; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserReq {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[async_trait::async_trait]
pub trait UserService: Sync + Send {
    async fn register(&self, req: RegisterUserReq) -> lessonhub::Result<User>;

    async fn list(&self) -> lessonhub::Result<Vec<User>>;
}

pub struct DefaultUserService {
    repo: Arc<dyn UserRepository>,
}

impl DefaultUserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

fn require(field: Option<String>) -> lessonhub::Result<String> {
    match field {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(lessonhub::Error::Validation),
    }
}

#[async_trait::async_trait]
impl UserService for DefaultUserService {
    async fn register(&self, req: RegisterUserReq) -> lessonhub::Result<User> {
        let first_name = require(req.first_name)?;
        let last_name = require(req.last_name)?;
        let email = require(req.email)?;

        // Advisory pre-check for the friendly message; the store's unique
        // constraint stays authoritative under concurrent registrations.
        if self.repo.exists_by_email(&email).await? {
            return Err(lessonhub::Error::Conflict(email));
        }

        let user = self.repo.insert(&first_name, &last_name, &email).await?;
        tracing::info!(email = %user.email, "user registered");
        Ok(user)
    }

    async fn list(&self) -> lessonhub::Result<Vec<User>> {
        self.repo.find_all().await
    }
}
