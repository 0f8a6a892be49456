use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// Read-only score snapshot; the latest one backs `/credit/score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditScore {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub score: i32,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub trend: i32,
    pub rating: String,
    #[serde(default)]
    pub factors: CreditFactors,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditFactors {
    #[serde(rename = "paymentHistory", default)]
    pub payment_history: i32,
    #[serde(rename = "creditUtilization", default)]
    pub credit_utilization: i32,
    #[serde(rename = "creditAge", default)]
    pub credit_age: i32,
}

/// Append-only timeline entry behind `/credit/history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditHistoryEvent {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    pub score: i32,
    pub event: String,
    pub impact: i32,
}
