use std::env;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use dotenvy::dotenv;
use server::routes;
use server::storage::Storage;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn run() -> std::io::Result<()> {
    dotenv().ok();

    // Storage is the one process-fatal dependency: no connection string or a
    // failed connection terminates startup immediately.
    let mongo_uri = match env::var("MONGO_URI") {
        Ok(uri) => uri,
        Err(_) => {
            error!("MONGO_URI missing in environment");
            std::process::exit(1);
        }
    };

    let storage = match Storage::init(&mongo_uri).await {
        Ok(storage) => storage,
        Err(e) => {
            error!("MongoDB error: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = storage.health_check().await {
        error!("MongoDB error: {e}");
        std::process::exit(1);
    }
    info!("MongoDB connected");

    let data = web::Data::new(storage);
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let app_data = data.clone();
    info!("CRED TRACKER backend listening on port {port}");

    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    if let Ok(storage) = Arc::try_unwrap(data.into_inner()) {
        storage.shutdown().await;
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime");
    runtime.block_on(run())
}
