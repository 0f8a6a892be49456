use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One recurring charge surfaced by the detection scan. Items start
/// undetected; a scan flips them and `/debt/hidden` aggregates the detected
/// ones by category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HiddenDebtItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub amount: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub detected: bool,
}
