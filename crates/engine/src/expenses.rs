//! The module contains the `Expense` record.

use bson::{oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// An expense as stored in the `expense` collection.
///
/// `amount` keeps the JSON number the client sent, integer or float.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub amount: Number,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    pub category: String,
    pub description: String,
    #[serde(rename = "repeatMonthly")]
    pub repeat_monthly: bool,
}
