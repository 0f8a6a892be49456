use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub amount: f64,
    #[serde(rename = "dueDate", with = "chrono_datetime_as_bson_datetime")]
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub urgent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Paid bills drop out of `/bills/upcoming` on the next fetch.
    #[serde(default)]
    pub paid: bool,
}
