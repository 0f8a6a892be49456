use actix_web::{post, web, HttpResponse};
use bcrypt::verify;
use mongodb::bson::doc;
use serde_json::json;
use validator::Validate;

use crate::error::ApiError;
use crate::models::User;
use crate::storage::Storage;
use crate::types::auth_types::LoginInput;
use crate::utils::jwt::{create_jwt, jwt_secret};

/// Credential check against the stored bcrypt hash, issuing a 7-day token on
/// match. An unknown email and a wrong password collapse into the same
/// failure, with no hint of which field was wrong.
pub fn issue_token(
    user: Option<User>,
    password: &str,
    secret: &str,
) -> Result<(String, User), ApiError> {
    let user = user.ok_or(ApiError::InvalidCredentials)?;

    if !verify(password, &user.password)? {
        return Err(ApiError::InvalidCredentials);
    }

    let id = user.id.map(|oid| oid.to_hex()).unwrap_or_default();
    let token = create_jwt(&id, &user.email, secret)?;
    Ok((token, user))
}

#[post("/api/auth/login")]
pub async fn login(
    storage: web::Data<Storage>,
    input: web::Json<LoginInput>,
) -> Result<HttpResponse, ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let user = storage
        .users()
        .find_one(doc! { "email": &input.email }, None)
        .await?;

    let (token, user) = issue_token(user, &input.password, &jwt_secret())?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "token": token,
        "user": {
            "name": user.name,
            "email": user.email,
            "isPremium": user.is_premium,
        }
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::verify_jwt;
    use mongodb::bson::oid::ObjectId;

    // Low cost keeps the hashing fast; the branch under test is the same.
    fn account(password: &str) -> User {
        User {
            id: Some(ObjectId::new()),
            name: "Mohan".to_string(),
            email: "mohan@example.com".to_string(),
            password: bcrypt::hash(password, 4).expect("hash password"),
            is_premium: true,
        }
    }

    #[test]
    fn valid_credentials_issue_a_usable_token() {
        let user = account("hunter22");
        let expected_id = user.id.expect("account has an id").to_hex();

        let (token, user) = issue_token(Some(user), "hunter22", "test_secret").unwrap();

        let claims = verify_jwt(&token, "test_secret").expect("issued token verifies");
        assert_eq!(claims.sub, expected_id);
        assert_eq!(claims.email, "mohan@example.com");
        assert_eq!(user.email, "mohan@example.com");
    }

    #[test]
    fn wrong_password_yields_no_token() {
        let result = issue_token(Some(account("hunter22")), "letmein", "test_secret");
        assert!(matches!(result, Err(ApiError::InvalidCredentials)));
    }

    #[test]
    fn unknown_email_fails_identically_to_wrong_password() {
        let unknown = issue_token(None, "hunter22", "test_secret").unwrap_err();
        let mismatch = issue_token(Some(account("hunter22")), "letmein", "test_secret").unwrap_err();
        assert_eq!(unknown.to_string(), mismatch.to_string());
        assert_eq!(unknown.to_string(), "Invalid credentials");
    }
}
