use anyhow::Context;
use std::env;
use tracing::warn;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Process configuration, read once at startup. The signing secret is
/// mandatory: refusing to boot beats answering every request with 500.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub token_ttl_hours: i64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        if jwt_secret.len() < 32 {
            warn!("JWT_SECRET is shorter than 32 bytes; use a longer random value in production");
        }

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {}", value))?,
            Err(_) => DEFAULT_PORT,
        };

        let token_ttl_hours = match env::var("TOKEN_TTL_HOURS") {
            Ok(value) => {
                let hours = value
                    .parse::<i64>()
                    .with_context(|| format!("TOKEN_TTL_HOURS is not a number: {}", value))?;
                if hours <= 0 {
                    anyhow::bail!("TOKEN_TTL_HOURS must be positive");
                }
                hours
            }
            Err(_) => DEFAULT_TOKEN_TTL_HOURS,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            token_ttl_hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var juggling is process-global, so this single test covers
    // the whole parse path in one go.
    #[test]
    fn test_from_env_requires_secret_and_parses_overrides() {
        env::remove_var("JWT_SECRET");
        env::set_var("DATABASE_URL", "sqlite://data/test.db");
        assert!(AppConfig::from_env().is_err());

        env::set_var("JWT_SECRET", "a-test-secret-that-is-long-enough!!");
        env::set_var("PORT", "8081");
        env::set_var("TOKEN_TTL_HOURS", "48");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.token_ttl_hours, 48);

        env::set_var("TOKEN_TTL_HOURS", "0");
        assert!(AppConfig::from_env().is_err());

        env::remove_var("PORT");
        env::remove_var("TOKEN_TTL_HOURS");
        env::remove_var("JWT_SECRET");
        env::remove_var("DATABASE_URL");
    }
}
