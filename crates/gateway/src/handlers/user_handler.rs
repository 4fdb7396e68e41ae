//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use common::{AppError, AppResult};
use domain::{Page, PageMeta, UserId, UserInput, UserRecord, DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_NUMBER};

use crate::extractors::{JsonBody, PathParam, QueryParams};
use crate::state::AppState;

/// List query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Page number, 1-indexed
    #[serde(default = "default_page")]
    #[param(default = 1)]
    pub page: i64,
    /// Items per page
    #[serde(default = "default_limit")]
    #[param(default = 10)]
    pub limit: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE_NUMBER
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

/// List response body
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub data: Vec<UserRecord>,
    pub pagination: PageMeta,
}

impl From<Page<UserRecord>> for UserListResponse {
    fn from(page: Page<UserRecord>) -> Self {
        Self {
            data: page.data,
            pagination: page.pagination,
        }
    }
}

/// Negative ids never match a stored record.
fn user_id(raw: i64) -> AppResult<UserId> {
    UserId::try_from(raw).map_err(|_| AppError::NotFound)
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List users
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "Users",
    params(ListParams),
    responses(
        (status = 200, description = "Users with pagination metadata", body = UserListResponse),
        (status = 400, description = "Non-numeric page or limit")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<UserListResponse>> {
    let page = state
        .user_service
        .list_users(params.page, params.limit)
        .await?;
    Ok(Json(page.into()))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "Users",
    request_body = UserInput,
    responses(
        (status = 201, description = "User created", body = UserRecord),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserInput>,
) -> AppResult<(StatusCode, Json<UserRecord>)> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = UserRecord),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> AppResult<Json<UserRecord>> {
    let user = state.user_service.get_user(user_id(id)?).await?;
    Ok(Json(user))
}

/// Update user
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserInput,
    responses(
        (status = 200, description = "User updated", body = UserRecord),
        (status = 400, description = "Malformed request body"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UserInput>,
) -> AppResult<Json<UserRecord>> {
    let user = state.user_service.update_user(user_id(id)?, payload).await?;
    Ok(Json(user))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(user_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
