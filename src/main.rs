use campuspass::{
    config::AppConfig,
    db,
    repositories::{SqliteEPassRepository, SqliteEventRepository, SqliteUserRepository},
    services::{
        create_payment_verifier, AuthService, EPassService, EventService, TokenService,
        UserService,
    },
    AppState,
};

use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "campuspass=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Database connection
    let pool = db::create_pool(&config.database_url).await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Initialize repositories
    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let event_repository = Arc::new(SqliteEventRepository::new(pool.clone()));
    let epass_repository = Arc::new(SqliteEPassRepository::new(pool.clone()));

    // Initialize services
    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let auth_service = Arc::new(AuthService::new(user_repository.clone()));
    let token_service = Arc::new(TokenService::new(
        &config.jwt_secret,
        config.token_ttl_hours,
    ));
    let event_service = Arc::new(EventService::new(event_repository.clone()));
    let epass_service = Arc::new(EPassService::new(
        epass_repository,
        event_repository,
        user_repository,
        create_payment_verifier(),
    ));

    let state = AppState {
        user_service,
        auth_service,
        token_service,
        event_service,
        epass_service,
        pool,
    };

    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ]);

    let app = campuspass::app(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
