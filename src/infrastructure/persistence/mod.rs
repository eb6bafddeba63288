use crate::domain::entities::User;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

mod users;

/// In-process entity table shared by every request.
pub struct Database {
    pub(crate) users: RwLock<HashMap<i64, User>>,
    latency: Duration,
}

impl Database {
    pub fn new() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    /// Every store operation sleeps for `latency` before touching the table.
    pub fn with_latency(latency: Duration) -> Self {
        if !latency.is_zero() {
            tracing::info!("Simulated store latency: {:?}", latency);
        }
        Self {
            users: RwLock::new(HashMap::new()),
            latency,
        }
    }

    /// Pre-populate the table, e.g. for demos and tests.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let table = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: RwLock::new(table),
            latency: Duration::ZERO,
        }
    }

    pub(crate) async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
