use crate::domain::entities::User;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage for [`User`] entities keyed by numeric id.
///
/// Implementations must make each call atomic with respect to the single
/// entity it touches.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with a not-found error when no user has this id.
    async fn get_user_by_id(&self, id: i64) -> DomainResult<User>;

    /// Case-insensitive lookup.
    async fn find_user_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Insert only if the id is free. Returns `false` without storing
    /// anything when the id is already taken, and fails when another user
    /// already holds the email.
    async fn insert_user(&self, user: &User) -> DomainResult<bool>;

    /// Replace name and age of an existing user. The stored email is kept.
    async fn update_user(&self, user: &User) -> DomainResult<()>;

    async fn delete_user(&self, id: i64) -> DomainResult<()>;

    /// All users ordered by id
    async fn list_users(&self) -> DomainResult<Vec<User>>;
}
