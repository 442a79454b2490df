//! Users API handlers.
//!
//! ```text
//! GET /users
//! GET /users/{id}
//! POST /users {"name":"Maria Silva","email":"maria@x.com"}
//! PUT /users/{id} {"name":"Maria Silva","email":"maria@x.com"}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{Error, USER_NOT_FOUND, User, UserId, UserInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::payload::string_only;
use crate::inbound::http::state::HttpState;

/// Success message for `PUT /users/{id}`.
pub const USER_UPDATED: &str = "User updated successfully.";
/// Success message for `DELETE /users/{id}`.
pub const USER_DELETED: &str = "User deleted successfully.";

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Fields that are not JSON strings are treated as missing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserRequest {
    #[schema(value_type = Option<String>, example = "Maria Silva")]
    pub name: Option<Value>,
    #[schema(value_type = Option<String>, example = "maria@x.com")]
    pub email: Option<Value>,
}

impl From<UserRequest> for UserInput {
    fn from(value: UserRequest) -> Self {
        Self {
            name: string_only(value.name),
            email: string_only(value.email),
        }
    }
}

/// Body returned by user updates and deletions.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserMutationResponse {
    #[schema(example = "User updated successfully.")]
    pub message: String,
    pub user: User,
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::parse(raw).ok_or_else(|| Error::not_found(USER_NOT_FOUND))
}

/// List all users in creation order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let user = state.users.get_user(id).await?;
    Ok(web::Json(user))
}

/// Create a user.
///
/// Name and e-mail are required and must not collide with any existing
/// user's name or e-mail.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing fields or malformed JSON", body = ErrorBody),
        (status = 409, description = "Name or e-mail already in use", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users_command
        .create_user(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(user))
}

/// Replace a user's name and e-mail.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserMutationResponse),
        (status = 400, description = "Missing fields or malformed JSON", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 409, description = "Name or e-mail already in use", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<UserMutationResponse>> {
    let id = parse_user_id(&path)?;
    let user = state
        .users_command
        .update_user(id, payload.into_inner().into())
        .await?;
    Ok(web::Json(UserMutationResponse {
        message: USER_UPDATED.to_owned(),
        user,
    }))
}

/// Delete a user.
///
/// Tickets referencing the user are left untouched.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = UserMutationResponse),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserMutationResponse>> {
    let id = parse_user_id(&path)?;
    let user = state.users_command.delete_user(id).await?;
    Ok(web::Json(UserMutationResponse {
        message: USER_DELETED.to_owned(),
        user,
    }))
}
