use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, DateTime as BsonDateTime};
use mongodb::options::{FindOneOptions, FindOptions};
use serde_json::json;

use crate::error::ApiError;
use crate::storage::Storage;
use crate::types::credit_types::HistoryQuery;
use crate::utils::dates::period_cutoff;

/// Latest score snapshot with trend, rating and factor breakdown.
#[get("/credit/score")]
pub async fn score(storage: web::Data<Storage>) -> Result<HttpResponse, ApiError> {
    let options = FindOneOptions::builder().sort(doc! { "date": -1 }).build();
    let snapshot = storage
        .credit_scores()
        .find_one(doc! {}, options)
        .await?
        .ok_or(ApiError::NotFound("Credit score"))?;

    Ok(HttpResponse::Ok().json(json!({
        "score": snapshot.score,
        "date": snapshot.date.to_rfc3339(),
        "trend": snapshot.trend,
        "rating": snapshot.rating,
        "factors": {
            "paymentHistory": snapshot.factors.payment_history,
            "creditUtilization": snapshot.factors.credit_utilization,
            "creditAge": snapshot.factors.credit_age,
        }
    })))
}

/// Timeline events within the requested period, newest first.
#[get("/credit/history")]
pub async fn history(
    storage: web::Data<Storage>,
    query: web::Query<HistoryQuery>,
) -> Result<HttpResponse, ApiError> {
    let period = query.period.as_deref().unwrap_or("6m");
    let cutoff = period_cutoff(period, Utc::now());

    let options = FindOptions::builder().sort(doc! { "date": -1 }).build();
    let events: Vec<_> = storage
        .credit_history()
        .find(
            doc! { "date": { "$gte": BsonDateTime::from_chrono(cutoff) } },
            options,
        )
        .await?
        .try_collect()
        .await?;

    let history: Vec<_> = events
        .into_iter()
        .map(|event| {
            json!({
                "date": event.date.to_rfc3339(),
                "score": event.score,
                "event": event.event,
                "impact": event.impact,
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(json!({ "history": history })))
}
