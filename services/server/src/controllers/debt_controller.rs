use actix_web::{get, post, web, HttpResponse};
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use serde_json::json;

use crate::error::ApiError;
use crate::models::HiddenDebtItem;
use crate::storage::Storage;

pub struct Category {
    pub name: String,
    pub icon: Option<String>,
    pub total: f64,
    pub items: Vec<(String, f64)>,
}

/// Groups detected items by category in first-seen order and totals them.
pub fn group_categories(items: Vec<HiddenDebtItem>) -> (Vec<Category>, f64, usize) {
    let mut categories: Vec<Category> = Vec::new();
    let mut total = 0.0;
    let count = items.len();

    for item in items {
        total += item.amount;
        match categories.iter_mut().find(|c| c.name == item.category) {
            Some(category) => {
                category.total += item.amount;
                category.items.push((item.name, item.amount));
                if category.icon.is_none() {
                    category.icon = item.icon;
                }
            }
            None => categories.push(Category {
                name: item.category,
                icon: item.icon,
                total: item.amount,
                items: vec![(item.name, item.amount)],
            }),
        }
    }

    (categories, total, count)
}

/// Detected recurring subscriptions, aggregated by category.
#[get("/debt/hidden")]
pub async fn hidden(storage: web::Data<Storage>) -> Result<HttpResponse, ApiError> {
    let items: Vec<HiddenDebtItem> = storage
        .hidden_debts()
        .find(doc! { "detected": true }, None)
        .await?
        .try_collect()
        .await?;

    let (categories, total, count) = group_categories(items);
    let categories: Vec<_> = categories
        .into_iter()
        .map(|category| {
            json!({
                "name": category.name,
                "icon": category.icon,
                "total": category.total,
                "items": category
                    .items
                    .into_iter()
                    .map(|(name, amount)| json!({ "name": name, "amount": amount }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "categories": categories,
        "totalHiddenDebt": total,
        "totalSubscriptions": count,
    })))
}

/// Detection scan: flips undetected recurring items to detected and reports
/// how many turned up. The follow-up `/debt/hidden` fetch shows them.
#[post("/debt/scan")]
pub async fn scan(storage: web::Data<Storage>) -> Result<HttpResponse, ApiError> {
    let result = storage
        .hidden_debts()
        .update_many(
            doc! { "detected": false },
            doc! { "$set": { "detected": true } },
            None,
        )
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "newItems": result.modified_count,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str, amount: f64) -> HiddenDebtItem {
        HiddenDebtItem {
            id: None,
            name: name.to_string(),
            amount,
            category: category.to_string(),
            icon: None,
            detected: true,
        }
    }

    #[test]
    fn items_group_by_category_with_totals() {
        let (categories, total, count) = group_categories(vec![
            item("Netflix", "Streaming", 649.0),
            item("Drive", "Cloud", 130.0),
            item("Prime", "Streaming", 398.0),
        ]);

        assert_eq!(count, 3);
        assert_eq!(total, 1177.0);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Streaming");
        assert_eq!(categories[0].total, 1047.0);
        assert_eq!(categories[0].items.len(), 2);
        assert_eq!(categories[1].name, "Cloud");
    }

    #[test]
    fn no_items_means_empty_aggregate() {
        let (categories, total, count) = group_categories(vec![]);
        assert!(categories.is_empty());
        assert_eq!(total, 0.0);
        assert_eq!(count, 0);
    }
}
