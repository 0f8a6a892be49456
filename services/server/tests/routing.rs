//! Route-table coverage. These run without a reachable database: the Mongo
//! driver connects lazily, so the app builds fine and a handler that gets as
//! far as its query fails with 500. That is enough to tell a resolved route
//! from a 404.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::json;

use server::routes;
use server::storage::Storage;

const UNREACHABLE_URI: &str =
    "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=100&connectTimeoutMS=100";

async fn storage() -> web::Data<Storage> {
    let storage = Storage::init(UNREACHABLE_URI)
        .await
        .expect("lazy client init");
    web::Data::new(storage)
}

#[actix_web::test]
async fn every_resource_path_resolves() {
    std::env::set_var("DEMO_USER_EMAIL", "mohan@example.com");
    let app = test::init_service(
        App::new()
            .app_data(storage().await)
            .configure(routes::configure),
    )
    .await;

    for path in [
        "/user/profile",
        "/credit/score",
        "/credit/history?period=6m",
        "/bills/upcoming",
        "/emis/prioritized",
        "/debt/hidden",
    ] {
        let req = test::TestRequest::get().uri(path).to_request();
        let res = test::call_service(&app, req).await;
        assert_ne!(
            res.status(),
            StatusCode::NOT_FOUND,
            "{path} fell through the route table"
        );
    }
}

#[actix_web::test]
async fn status_and_login_are_reachable_without_auth() {
    let app = test::init_service(
        App::new()
            .app_data(storage().await)
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    // A malformed email is rejected by validation before any database work.
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "not-an-email", "password": "hunter22"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn unknown_paths_still_miss() {
    let app = test::init_service(
        App::new()
            .app_data(storage().await)
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/no/such/resource").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn garbage_bearer_token_is_forbidden() {
    let app = test::init_service(
        App::new()
            .app_data(storage().await)
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/credit/score")
        .insert_header(("Authorization", "Bearer not.a.jwt"))
        .to_request();

    match test::try_call_service(&app, req).await {
        Ok(res) => {
            assert_eq!(res.status(), StatusCode::FORBIDDEN);
        }
        Err(e) => {
            assert_eq!(e.as_response_error().status_code(), StatusCode::FORBIDDEN);
        }
    }
}
