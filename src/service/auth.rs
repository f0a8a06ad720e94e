use crate::error::CmsError;
use crate::types::user::{Role, User};

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

/// HS256 signing material plus token lifetime.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    pub fn issue(&self, user: &User) -> Result<String, CmsError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )?)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, CmsError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(data.claims)
    }
}

/// Hashing and verification run on the blocking pool.
pub async fn hash_password(password: String, cost: u32) -> Result<String, CmsError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| CmsError::Store(format!("hash task failed: {e}")))?
        .map_err(CmsError::from)
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, CmsError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| CmsError::Store(format!("verify task failed: {e}")))?
        .map_err(CmsError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "u1".into(),
            email: "a@b.c".into(),
            password_hash: String::new(),
            role,
            is_active: true,
            last_login: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn issued_token_verifies() {
        let keys = TokenKeys::new("secret", 1);
        let token = keys.issue(&user(Role::Admin)).unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let token = TokenKeys::new("one", 1).issue(&user(Role::Editor)).unwrap();
        let err = TokenKeys::new("two", 1).verify(&token).unwrap_err();
        assert!(matches!(err, CmsError::Token(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = TokenKeys::new("secret", -2);
        let token = keys.issue(&user(Role::Editor)).unwrap();
        assert!(keys.verify(&token).is_err());
    }

    #[tokio::test]
    async fn password_round_trip() {
        let hash = hash_password("hunter22".into(), 4).await.unwrap();
        assert!(verify_password("hunter22".into(), hash.clone()).await.unwrap());
        assert!(!verify_password("wrong".into(), hash).await.unwrap());
    }
}
