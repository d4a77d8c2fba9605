use campuspass::{
    models::user::Role,
    repositories::user_repository::SqliteUserRepository,
    services::{
        auth_service::{AuthService, AuthServiceError, LoginRequest},
        token_service::{TokenError, TokenService},
        user_service::{SignupRequest, UserService},
    },
    test_utils::test_helpers,
};
use std::sync::Arc;

async fn setup_user(email: &str, password: &str) -> (AuthService, i64) {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let user_service = UserService::new(repository.clone());

    let user = user_service
        .signup(SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: "Auth Test".to_string(),
            role: Role::Attendee,
        })
        .await
        .unwrap();

    (AuthService::new(repository), user.id)
}

#[tokio::test]
async fn test_authenticate_success() {
    let (auth_service, user_id) = setup_user("auth@example.com", "correctpassword").await;

    let result = auth_service
        .authenticate(LoginRequest {
            email: "auth@example.com".to_string(),
            password: "correctpassword".to_string(),
        })
        .await;

    let user = result.unwrap();
    assert_eq!(user.id, user_id);
    assert_eq!(user.email, "auth@example.com");
}

#[tokio::test]
async fn test_authenticate_is_case_insensitive_on_email() {
    let (auth_service, user_id) = setup_user("mixed@example.com", "correctpassword").await;

    let user = auth_service
        .authenticate(LoginRequest {
            email: "MiXeD@Example.com".to_string(),
            password: "correctpassword".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.id, user_id);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_look_identical() {
    let (auth_service, _) = setup_user("leak@example.com", "correctpassword").await;

    let wrong_password = auth_service
        .authenticate(LoginRequest {
            email: "leak@example.com".to_string(),
            password: "wrongpassword".to_string(),
        })
        .await
        .unwrap_err();

    let unknown_email = auth_service
        .authenticate(LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "whatever123".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, AuthServiceError::InvalidCredentials));
    assert!(matches!(unknown_email, AuthServiceError::InvalidCredentials));
    // Identical rendering: nothing distinguishes the two cases.
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn test_token_round_trip_after_login() {
    let (auth_service, user_id) = setup_user("token@example.com", "correctpassword").await;
    let token_service = TokenService::new("integration-secret", 24);

    let user = auth_service
        .authenticate(LoginRequest {
            email: "token@example.com".to_string(),
            password: "correctpassword".to_string(),
        })
        .await
        .unwrap();

    let token = token_service.issue(user.id, user.role).unwrap();
    let claims = token_service.verify(&token).unwrap();

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.role, Role::Attendee);
}

#[tokio::test]
async fn test_expired_token_is_rejected_as_expired() {
    let token_service = TokenService::new("integration-secret", -1);

    let token = token_service.issue(1, Role::Attendee).unwrap();
    let result = token_service.verify(&token);

    assert!(matches!(result, Err(TokenError::Expired)));
}
