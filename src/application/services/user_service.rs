use crate::domain::entities::{CreateUserRequest, UpdateUserRequest, User};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::user_repository::UserRepository;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

const MAX_ID_ATTEMPTS: usize = 64;

/// User management use cases.
///
/// Validation failures produce fresh errors; failures coming back from the
/// repository are passed up untouched so their "not found" wording reaches
/// the HTTP layer.
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    next_id: Arc<AtomicI64>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self::with_next_id(user_repo, 1)
    }

    /// Start id assignment at `next_id` instead of 1.
    pub fn with_next_id(user_repo: Arc<dyn UserRepository>, next_id: i64) -> Self {
        Self {
            user_repo,
            next_id: Arc::new(AtomicI64::new(next_id.max(1))),
        }
    }

    pub async fn get_by_id(&self, id: i64) -> DomainResult<User> {
        if id <= 0 {
            tracing::warn!("Rejected lookup of invalid user ID {}", id);
            return Err(DomainError::validation("Invalid user ID"));
        }

        tracing::debug!("Looking up user {}", id);
        self.user_repo.get_user_by_id(id).await
    }

    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.user_repo.list_users().await
    }

    pub async fn create(&self, request: CreateUserRequest) -> DomainResult<User> {
        let CreateUserRequest { name, email, age } = request;

        if name.trim().is_empty() {
            return Err(DomainError::validation("Name is required"));
        }
        if email.trim().is_empty() {
            return Err(DomainError::validation("Email is required"));
        }

        if self.user_repo.find_user_by_email(&email).await?.is_some() {
            tracing::warn!("Rejected user creation: email {} already exists", email);
            return Err(DomainError::validation("Email already exists"));
        }

        for _ in 0..MAX_ID_ATTEMPTS {
            let Some(id) = self.allocate_id() else {
                tracing::error!("User ID sequence exhausted");
                return Err(DomainError::internal("User ID sequence exhausted"));
            };
            let user = User::new(id, name.clone(), email.clone(), age);

            if self.user_repo.insert_user(&user).await? {
                tracing::info!("Created user {} ({})", user.id, user.email);
                return Ok(user);
            }

            tracing::debug!("User ID {} taken, trying next", id);
        }

        tracing::error!(
            "Gave up allocating a user ID after {} attempts",
            MAX_ID_ATTEMPTS
        );
        Err(DomainError::internal("Unable to allocate a unique user ID"))
    }

    pub async fn update(&self, id: i64, request: UpdateUserRequest) -> DomainResult<User> {
        let mut user = self.get_by_id(id).await?;

        if request.name.trim().is_empty() {
            return Err(DomainError::validation("Name is required"));
        }

        user.name = request.name;
        user.age = request.age;
        self.user_repo.update_user(&user).await?;

        tracing::info!("Updated user {}", user.id);
        Ok(user)
    }

    /// Next id from the sequence, or `None` once it would leave the
    /// positive range.
    fn allocate_id(&self) -> Option<i64> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .ok()
    }

    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.get_by_id(id).await?;
        self.user_repo.delete_user(id).await?;

        tracing::info!("Deleted user {}", id);
        Ok(())
    }
}
