use crate::models::user::Role;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,
    #[error("Invalid token")]
    Invalid,
    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Contents of a session token. Validity is purely a function of the
/// signature and `exp`; nothing is stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: i64,
    pub role: Role,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    pub fn issue(&self, user_id: i64, role: Role) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Validates signature and expiry with zero leeway. An expired
    /// token is distinguished from a malformed or forged one.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = TokenService::new("test-secret", 24);

        let token = service.issue(42, Role::Organizer).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, Role::Organizer);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        // Negative TTL puts exp in the past at issue time.
        let service = TokenService::new("test-secret", -1);

        let token = service.issue(1, Role::Attendee).unwrap();
        let result = service.verify(&token);

        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let issuer = TokenService::new("secret-a", 24);
        let verifier = TokenService::new("secret-b", 24);

        let token = issuer.issue(1, Role::Attendee).unwrap();
        let result = verifier.verify(&token);

        assert!(matches!(result, Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let service = TokenService::new("test-secret", 24);

        assert!(matches!(
            service.verify("not.a.token"),
            Err(TokenError::Invalid)
        ));
        assert!(matches!(service.verify(""), Err(TokenError::Invalid)));
    }
}
