use crate::infrastructure::http::controllers;
use crate::infrastructure::http::middleware::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route(
            "/api/users",
            post(controllers::users::create_user).get(controllers::users::list_users),
        )
        .route(
            "/api/users/:id",
            get(controllers::users::get_user)
                .put(controllers::users::update_user)
                .delete(controllers::users::delete_user),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Userbook User Directory"
}

async fn health_handler() -> &'static str {
    "OK"
}
