use campuspass::{
    models::user::Role,
    repositories::user_repository::SqliteUserRepository,
    services::user_service::{SignupRequest, UserService, UserServiceError},
    test_utils::test_helpers,
};
use std::sync::Arc;

fn signup_request(email: &str) -> SignupRequest {
    SignupRequest {
        email: email.to_string(),
        password: "secret1".to_string(),
        name: "Test User".to_string(),
        role: Role::Attendee,
    }
}

#[tokio::test]
async fn test_signup_success() {
    // Create isolated test database
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    let result = service.signup(signup_request("test@example.com")).await;
    assert!(result.is_ok());

    let user = result.unwrap();
    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.role, Role::Attendee);
    assert_eq!(user.name, "Test User");
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let service = UserService::new(repository);

    let result1 = service.signup(signup_request("duplicate@example.com")).await;
    assert!(result1.is_ok());

    let result2 = service.signup(signup_request("duplicate@example.com")).await;
    assert!(matches!(result2, Err(UserServiceError::EmailTaken)));
}

#[tokio::test]
async fn test_signup_duplicate_email_differs_only_in_case() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let service = UserService::new(repository);

    service
        .signup(signup_request("casefold@example.com"))
        .await
        .unwrap();

    let result = service.signup(signup_request("CaseFold@Example.COM")).await;
    assert!(matches!(result, Err(UserServiceError::EmailTaken)));
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let service = UserService::new(repository);

    let user = service.signup(signup_request("hash@example.com")).await.unwrap();

    assert_ne!(user.password_hash, "secret1");
    assert!(user.password_hash.starts_with("$argon2"));
    assert!(service.verify_password("secret1", &user.password_hash));
    assert!(!service.verify_password("wrong-password", &user.password_hash));
}

#[tokio::test]
async fn test_organizer_role_round_trips() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let service = UserService::new(repository);

    let mut request = signup_request("organizer@example.com");
    request.role = Role::Organizer;

    let user = service.signup(request).await.unwrap();
    assert_eq!(user.role, Role::Organizer);

    let fetched = service
        .find_user_by_email("organizer@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.role, Role::Organizer);
}

#[tokio::test]
async fn test_list_users_with_pagination() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let service = UserService::new(repository);

    for i in 0..5 {
        service
            .signup(signup_request(&format!("user{}@example.com", i)))
            .await
            .unwrap();
    }

    let users = service.list_users(None, None).await.unwrap();
    assert_eq!(users.len(), 5);

    let limited = service.list_users(Some(3), None).await.unwrap();
    assert_eq!(limited.len(), 3);

    let offset = service.list_users(Some(10), Some(4)).await.unwrap();
    assert_eq!(offset.len(), 1);
}
