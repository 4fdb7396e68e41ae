//! OpenAPI documentation.

use utoipa::{openapi::server::Server, OpenApi};

use crate::handlers::health_handler::HealthResponse;
use crate::handlers::user_handler::UserListResponse;
use domain::{LoginRequest, LoginResponse, LoginUser, PageMeta, UserInput, UserRecord};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
        crate::handlers::auth_handler::login,
    ),
    components(
        schemas(
            HealthResponse,
            UserRecord,
            UserInput,
            PageMeta,
            UserListResponse,
            LoginRequest,
            LoginResponse,
            LoginUser,
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Users", description = "User record management"),
        (name = "Authentication", description = "Placeholder login"),
    )
)]
pub struct ApiDoc;

/// OpenAPI document with the server base set to the API prefix.
pub fn api_doc(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if !api_prefix.is_empty() {
        doc.servers = Some(vec![Server::new(api_prefix)]);
    }
    doc
}
