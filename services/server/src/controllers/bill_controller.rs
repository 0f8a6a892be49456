use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;
use serde_json::json;

use crate::error::ApiError;
use crate::storage::Storage;
use crate::types::bill_types::PayBillInput;
use crate::utils::dates::due_text;

/// Unpaid bills sorted by due date, with the proximity label precomputed.
#[get("/bills/upcoming")]
pub async fn upcoming(storage: web::Data<Storage>) -> Result<HttpResponse, ApiError> {
    let options = FindOptions::builder().sort(doc! { "dueDate": 1 }).build();
    let bills: Vec<_> = storage
        .bills()
        .find(doc! { "paid": false }, options)
        .await?
        .try_collect()
        .await?;

    let now = Utc::now();
    let bills: Vec<_> = bills
        .into_iter()
        .map(|bill| {
            json!({
                "id": bill.id.map(|oid| oid.to_hex()).unwrap_or_default(),
                "name": bill.name,
                "amount": bill.amount,
                "dueDate": bill.due_date.to_rfc3339(),
                "urgent": bill.urgent,
                "icon": bill.icon,
                "dueText": due_text(bill.due_date, now),
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(json!({ "bills": bills })))
}

/// Marks one bill paid; it drops out of the upcoming list on the next fetch.
#[post("/bills/pay")]
pub async fn pay(
    storage: web::Data<Storage>,
    input: web::Json<PayBillInput>,
) -> Result<HttpResponse, ApiError> {
    let id = ObjectId::parse_str(&input.bill_id)
        .map_err(|_| ApiError::Validation("Invalid bill id".to_string()))?;

    let result = storage
        .bills()
        .update_one(
            doc! { "_id": id, "paid": false },
            doc! { "$set": { "paid": true } },
            None,
        )
        .await?;

    if result.matched_count == 0 {
        return Err(ApiError::NotFound("Bill"));
    }

    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
