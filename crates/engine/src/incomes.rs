//! The module contains the `Income` record.

use bson::{oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// An income as stored in the `income` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Income {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub source: String,
    pub amount: Number,
    pub description: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    /// Label of a wallet kept elsewhere. Never checked against anything.
    pub wallet_id: String,
}
