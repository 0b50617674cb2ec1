use lessonhub::db::{self, AppDbPool};
use uuid::Uuid;

use crate::entity::User;
use crate::repository::UserRepository;

pub struct SqliteUserRepository {
    pool: AppDbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: AppDbPool) -> Self {
        Self { pool }
    }

    /// Creates the users table if it is not there yet. The UNIQUE constraint
    /// on email is the authoritative duplicate guard; `insert` maps its
    /// violation to `Error::Conflict`.
    pub async fn init_schema(&self) -> lessonhub::Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(db::map_err)?;
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
}

impl TryFrom<UserRow> for User {
    type Error = lessonhub::Error;

    fn try_from(row: UserRow) -> lessonhub::Result<User> {
        let id = Uuid::parse_str(&row.id).map_err(|e| {
            lessonhub::Error::Database(anyhow::anyhow!(
                "malformed user id '{}': {}",
                row.id,
                e
            ))
        })?;
        Ok(User {
            id: Some(id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        })
    }
}

#[async_trait::async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> lessonhub::Result<User> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO users (id, first_name, last_name, email)
             VALUES (?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if db::is_unique_violation(&e) {
                lessonhub::Error::Conflict(email.to_string())
            } else {
                db::map_err(e)
            }
        })?;

        Ok(User {
            id: Some(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        })
    }

    async fn find_all(&self) -> lessonhub::Result<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT id, first_name, last_name, email FROM users",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db::map_err)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn exists_by_email(&self, email: &str) -> lessonhub::Result<bool> {
        // Default sqlite TEXT comparison, so the match is case-sensitive.
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(db::map_err)
    }
}
