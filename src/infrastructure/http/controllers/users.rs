use crate::{
    domain::entities::{CreateUserRequest, UpdateUserRequest, User},
    infrastructure::http::middleware::{
        create_response, empty_response, lookup_response, ApiResult, AppState,
    },
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    lookup_response(state.user_service.list().await)
}

pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<User>> {
    let Path(id) = id?;
    lookup_response(state.user_service.get_by_id(id).await)
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(request) = payload?;
    create_response(state.user_service.create(request).await)
}

pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Path(id) = id?;
    let Json(request) = payload?;
    lookup_response(state.user_service.update(id, request).await)
}

pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    empty_response(state.user_service.delete(id).await)
}
