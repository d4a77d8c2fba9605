use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::repositories::user_repository::RepositoryError;
use crate::services::auth_service::AuthServiceError;
use crate::services::epass_service::EPassServiceError;
use crate::services::event_service::EventServiceError;
use crate::services::token_service::TokenError;
use crate::services::user_service::UserServiceError;

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// API-level error taxonomy. Service errors convert into one of these
/// variants; `IntoResponse` maps each to a status and a JSON body that
/// never carries internal detail.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate resource: {0}")]
    Duplicate(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authorization header is required")]
    MissingToken,

    #[error("The access token is invalid")]
    InvalidToken,

    #[error("The access token has expired")]
    TokenExpired,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payment confirmation required")]
    PaymentRequired,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            // The consolidated contract reports a duplicate signup as
            // 400, not 409.
            AppError::Duplicate(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            AppError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Authorization header is required".to_string(),
            ),
            AppError::InvalidToken => (
                StatusCode::FORBIDDEN,
                "The access token is invalid".to_string(),
            ),
            AppError::TokenExpired => (
                StatusCode::FORBIDDEN,
                "The access token has expired".to_string(),
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::PaymentRequired => (
                StatusCode::PAYMENT_REQUIRED,
                "Payment confirmation required".to_string(),
            ),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::InvalidEmail
            | UserServiceError::WeakPassword
            | UserServiceError::EmptyName => AppError::Validation(err.to_string()),
            UserServiceError::EmailTaken => AppError::Duplicate(err.to_string()),
            UserServiceError::UserNotFound => AppError::NotFound(err.to_string()),
            UserServiceError::HashingError(_) | UserServiceError::RepositoryError(_) => {
                AppError::Internal(err.into())
            }
        }
    }
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::InvalidCredentials => AppError::InvalidCredentials,
            AuthServiceError::UserNotFound => AppError::NotFound(err.to_string()),
            AuthServiceError::RepositoryError(_) => AppError::Internal(err.into()),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AppError::TokenExpired,
            TokenError::Invalid => AppError::InvalidToken,
            TokenError::Signing(_) => AppError::Internal(err.into()),
        }
    }
}

impl From<EventServiceError> for AppError {
    fn from(err: EventServiceError) -> Self {
        match err {
            EventServiceError::MissingField(_)
            | EventServiceError::InvalidDate
            | EventServiceError::NegativeFee
            | EventServiceError::InvalidCapacity => AppError::Validation(err.to_string()),
            EventServiceError::NotOrganizer | EventServiceError::NotOwner => {
                AppError::Forbidden(err.to_string())
            }
            EventServiceError::RepositoryError(_) => AppError::Internal(err.into()),
        }
    }
}

impl From<EPassServiceError> for AppError {
    fn from(err: EPassServiceError) -> Self {
        match err {
            EPassServiceError::EventNotFound | EPassServiceError::UserNotFound => {
                AppError::NotFound(err.to_string())
            }
            EPassServiceError::NotPassOwner => AppError::Forbidden(err.to_string()),
            EPassServiceError::PaymentRequired => AppError::PaymentRequired,
            EPassServiceError::AlreadyIssued => AppError::Conflict(err.to_string()),
            EPassServiceError::RepositoryError(_) => AppError::Internal(err.into()),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Internal(err.into())
    }
}
