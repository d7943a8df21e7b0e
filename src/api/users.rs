//! User endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::User;
use crate::infrastructure::user::{RegisterUserRequest, UpdateProfileRequest};

/// Create the user router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_user))
        .route("/{user_id}", get(get_user))
        .route("/{user_id}/profile", put(update_profile))
}

/// Profile update body; the user comes from the path
#[derive(Debug, Deserialize)]
pub struct UpdateProfileApiRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub old_password: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// User response (safe to expose)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at().to_rfc3339(),
            updated_at: user.updated_at().to_rfc3339(),
        }
    }
}

/// POST /users
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!("Registering user");

    let user = state.user_service.register(request).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user_id, "Getting user");

    let user = state.user_service.get(&user_id).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /users/{user_id}/profile
pub async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateProfileApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user_id, "Updating user profile");

    let user = state
        .update_profile
        .execute(UpdateProfileRequest {
            user_id,
            name: request.name,
            email: request.email,
            old_password: request.old_password,
            password: request.password,
        })
        .await?;

    Ok(Json(UserResponse::from(&user)))
}
