use crate::domain::entities::User;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::user_repository::UserRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;

fn user_not_found(id: i64) -> DomainError {
    DomainError::not_found(format!("User with ID {} not found", id))
}

#[async_trait]
impl UserRepository for Database {
    async fn get_user_by_id(&self, id: i64) -> DomainResult<User> {
        self.simulate_latency().await;
        let users = self.users.read().await;
        users.get(&id).cloned().ok_or_else(|| user_not_found(id))
    }

    async fn find_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.simulate_latency().await;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email_matches(email)).cloned())
    }

    async fn insert_user(&self, user: &User) -> DomainResult<bool> {
        self.simulate_latency().await;
        let mut users = self.users.write().await;

        if users.contains_key(&user.id) {
            tracing::debug!("User ID {} already taken", user.id);
            return Ok(false);
        }

        // Re-checked under the write lock so concurrent creates cannot both win
        if users.values().any(|u| u.email_matches(&user.email)) {
            return Err(DomainError::validation("Email already exists"));
        }

        users.insert(user.id, user.clone());
        Ok(true)
    }

    async fn update_user(&self, user: &User) -> DomainResult<()> {
        self.simulate_latency().await;
        let mut users = self.users.write().await;
        let stored = users.get_mut(&user.id).ok_or_else(|| user_not_found(user.id))?;
        stored.name = user.name.clone();
        stored.age = user.age;
        Ok(())
    }

    async fn delete_user(&self, id: i64) -> DomainResult<()> {
        self.simulate_latency().await;
        let mut users = self.users.write().await;
        users.remove(&id).map(|_| ()).ok_or_else(|| user_not_found(id))
    }

    async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.simulate_latency().await;
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.id);
        Ok(all)
    }
}
