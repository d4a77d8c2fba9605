use crate::error::{AppError, Result};
use crate::models::user::{Role, UserResponse};
use crate::services::auth_service::LoginRequest;
use crate::services::user_service::SignupRequest;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Deserialize)]
pub struct SignupBody {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupBody>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    // Role stays a string at the boundary so an unknown value is a
    // 400 validation failure rather than a body-rejection status.
    let role = Role::from_str(&body.role).map_err(AppError::Validation)?;

    let user = state
        .user_service
        .signup(SignupRequest {
            email: body.email,
            password: body.password,
            name: body.name,
            role,
        })
        .await?;

    let token = state.token_service.issue(user.id, user.role)?;

    tracing::info!("New {} account: {}", user.role, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<AuthResponse>> {
    let user = state
        .auth_service
        .authenticate(LoginRequest {
            email: body.email,
            password: body.password,
        })
        .await?;

    let token = state.token_service.issue(user.id, user.role)?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
