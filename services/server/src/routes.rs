use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::controllers::auth_controller::login;
use crate::controllers::user_controller::profile;
use crate::controllers::{bill_controller, credit_controller, debt_controller, emi_controller};
use crate::middleware::auth::AuthMiddleware;

async fn status() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "CRED TRACKER API running" }))
}

/// Registers the API surface. The status route and login are exact matches
/// registered first; the empty-prefix protected scope comes last, because the
/// router tries services in registration order and an empty scope swallows
/// every path that reaches it.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status))
        .service(login)
        .service(
            web::scope("")
                .wrap(AuthMiddleware)
                .service(profile)
                .service(credit_controller::score)
                .service(credit_controller::history)
                .service(bill_controller::upcoming)
                .service(bill_controller::pay)
                .service(emi_controller::prioritized)
                .service(emi_controller::pay)
                .service(debt_controller::hidden)
                .service(debt_controller::scan),
        );
}
