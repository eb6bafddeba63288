use crate::application::services::UserService;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

impl AppState {
    pub fn new(user_service: UserService) -> Self {
        Self { user_service }
    }
}
