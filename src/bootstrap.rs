use crate::application::services::UserService;
use crate::config::Config;
use crate::domain::ports::user_repository::UserRepository;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use std::sync::Arc;

pub fn build_app_state(config: &Config) -> AppState {
    let db = Database::with_latency(config.store_latency);
    app_state_with_repository(Arc::new(db))
}

/// Wire a service stack on top of an existing repository.
pub fn app_state_with_repository(user_repo: Arc<dyn UserRepository>) -> AppState {
    let user_service = UserService::new(user_repo);
    tracing::info!("User service initialized");

    AppState::new(user_service)
}
