use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use serde_json::json;

use crate::error::ApiError;
use crate::models::Emi;
use crate::storage::Storage;
use crate::utils::dates::due_text;

/// High-priority EMIs come first; within a priority band the earlier due date
/// wins.
pub fn prioritize(mut emis: Vec<Emi>) -> Vec<Emi> {
    emis.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.due_date.cmp(&b.due_date))
    });
    emis
}

#[get("/emis/prioritized")]
pub async fn prioritized(storage: web::Data<Storage>) -> Result<HttpResponse, ApiError> {
    let emis: Vec<Emi> = storage
        .emis()
        .find(doc! { "paid": false }, None)
        .await?
        .try_collect()
        .await?;

    let emis = prioritize(emis);
    let total_monthly: f64 = emis.iter().map(|emi| emi.amount).sum();

    let now = Utc::now();
    let emis: Vec<_> = emis
        .into_iter()
        .map(|emi| {
            json!({
                "name": emi.name,
                "amount": emi.amount,
                "dueDate": emi.due_date.to_rfc3339(),
                "priority": emi.priority.as_str(),
                "note": emi.note,
                "dueText": due_text(emi.due_date, now),
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "emis": emis,
        "totalMonthly": total_monthly,
    })))
}

/// Settles the highest-priority outstanding EMI. The endpoint takes no body;
/// the prioritized ordering picks the target.
#[post("/emis/pay")]
pub async fn pay(storage: web::Data<Storage>) -> Result<HttpResponse, ApiError> {
    let outstanding: Vec<Emi> = storage
        .emis()
        .find(doc! { "paid": false }, None)
        .await?
        .try_collect()
        .await?;

    let next = prioritize(outstanding)
        .into_iter()
        .next()
        .ok_or(ApiError::NotFound("Outstanding EMI"))?;

    let id = next.id.ok_or(ApiError::NotFound("Outstanding EMI"))?;
    storage
        .emis()
        .update_one(doc! { "_id": id }, doc! { "$set": { "paid": true } }, None)
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::{DateTime, Duration};

    fn emi(name: &str, priority: Priority, due_in_days: i64) -> Emi {
        let base: DateTime<Utc> = "2026-03-01T00:00:00Z".parse().unwrap();
        Emi {
            id: None,
            name: name.to_string(),
            amount: 1000.0,
            due_date: base + Duration::days(due_in_days),
            priority,
            note: None,
            paid: false,
        }
    }

    #[test]
    fn high_priority_renders_first() {
        let sorted = prioritize(vec![
            emi("low", Priority::Low, 1),
            emi("high", Priority::High, 20),
            emi("medium", Priority::Medium, 5),
        ]);
        let names: Vec<&str> = sorted.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["high", "medium", "low"]);
    }

    #[test]
    fn ties_break_on_due_date() {
        let sorted = prioritize(vec![
            emi("later", Priority::High, 15),
            emi("sooner", Priority::High, 3),
        ]);
        assert_eq!(sorted[0].name, "sooner");
    }
}
