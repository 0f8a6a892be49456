use std::env;

use actix_web::{get, web, HttpMessage, HttpRequest, HttpResponse};
use mongodb::bson::doc;
use serde_json::json;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::storage::Storage;

/// Profile summary. An authenticated request resolves the token subject; an
/// unauthenticated (dev-mode) request falls back to the `DEMO_USER_EMAIL`
/// account, the explicit stand-in for the original's hardcoded lookup.
#[get("/user/profile")]
pub async fn profile(
    req: HttpRequest,
    storage: web::Data<Storage>,
) -> Result<HttpResponse, ApiError> {
    let email = req
        .extensions()
        .get::<AuthUser>()
        .map(|user| user.email.clone())
        .or_else(|| env::var("DEMO_USER_EMAIL").ok())
        .ok_or(ApiError::NotFound("User"))?;

    let user = storage
        .users()
        .find_one(doc! { "email": &email }, None)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(HttpResponse::Ok().json(json!({
        "name": user.name,
        "email": user.email,
        "isPremium": user.is_premium,
    })))
}
