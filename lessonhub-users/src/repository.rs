use crate::entity::User;

/// Canonical collection of registered users. Implementations own the storage
/// and hand out values, never shared mutable state.
#[async_trait::async_trait]
pub trait UserRepository: Sync + Send {
    /// Assigns a fresh id, appends the record and returns the stored form.
    /// A duplicate email surfaces as `Error::Conflict` straight from the
    /// storage-level uniqueness guard.
    async fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> lessonhub::Result<User>;

    /// All stored records; ordering carries no meaning.
    async fn find_all(&self) -> lessonhub::Result<Vec<User>>;

    /// Exact, case-sensitive email match.
    async fn exists_by_email(&self, email: &str) -> lessonhub::Result<bool>;
}
