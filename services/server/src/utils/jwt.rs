use std::env;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Hex-encoded user ObjectId.
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

pub fn jwt_secret() -> String {
    env::var("JWT_SECRET").unwrap_or_else(|_| "dev_secret".to_string())
}

pub fn create_jwt(id: &str, email: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::days(7))
        .expect("valid timestamp")
        .timestamp();

    let claims = Claims {
        sub: id.to_owned(),
        email: email.to_owned(),
        exp: expiration as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_and_carries_the_subject() {
        let token = create_jwt("65f0c0ffee", "user@example.com", "test_secret").unwrap();
        let claims = verify_jwt(&token, "test_secret").unwrap();
        assert_eq!(claims.sub, "65f0c0ffee");
        assert_eq!(claims.email, "user@example.com");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_jwt("65f0c0ffee", "user@example.com", "test_secret").unwrap();
        assert!(verify_jwt(&token, "other_secret").is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(verify_jwt("not.a.jwt", "test_secret").is_err());
    }
}
