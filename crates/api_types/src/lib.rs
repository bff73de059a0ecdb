use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// For merge-update fields: absent means "keep", an explicit `null` is
/// rejected instead of being read as absent.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub mod message {
    use super::*;

    /// Body returned when a resource is created.
    ///
    /// The key is capitalized on the wire (`"Message"`), unlike [`Status`].
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Created {
        #[serde(rename = "Message")]
        pub message: String,
    }

    /// Body returned by update and delete, both on success and on not found.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Status {
        pub message: String,
    }
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub amount: Number,
        /// Naive ISO-8601 timestamp with fractional seconds
        /// (`YYYY-MM-DDTHH:MM:SS.ffffff`).
        pub date: String,
        pub category: String,
        pub description: String,
        #[serde(rename = "repeatMonthly")]
        pub repeat_monthly: bool,
    }

    /// Merge-update body: `date` is required, every other field is only
    /// written when present. `null` values are rejected.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseUpdate {
        #[serde(
            default,
            deserialize_with = "super::present",
            skip_serializing_if = "Option::is_none"
        )]
        pub amount: Option<Number>,
        pub date: String,
        #[serde(
            default,
            deserialize_with = "super::present",
            skip_serializing_if = "Option::is_none"
        )]
        pub category: Option<String>,
        #[serde(
            default,
            deserialize_with = "super::present",
            skip_serializing_if = "Option::is_none"
        )]
        pub description: Option<String>,
        #[serde(
            rename = "repeatMonthly",
            default,
            deserialize_with = "super::present",
            skip_serializing_if = "Option::is_none"
        )]
        pub repeat_monthly: Option<bool>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        #[serde(rename = "_id")]
        pub id: String,
        pub amount: Number,
        pub date: DateTime<Utc>,
        pub category: String,
        pub description: String,
        #[serde(rename = "repeatMonthly")]
        pub repeat_monthly: bool,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseList {
        pub expenses: Vec<ExpenseView>,
    }
}

pub mod income {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeNew {
        pub source: String,
        pub amount: Number,
        pub description: String,
        /// Naive ISO-8601 timestamp with fractional seconds
        /// (`YYYY-MM-DDTHH:MM:SS.ffffff`).
        pub date: String,
        /// Label of an external wallet. Stored as is, never resolved.
        pub wallet_id: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct IncomeUpdate {
        #[serde(
            default,
            deserialize_with = "super::present",
            skip_serializing_if = "Option::is_none"
        )]
        pub source: Option<String>,
        #[serde(
            default,
            deserialize_with = "super::present",
            skip_serializing_if = "Option::is_none"
        )]
        pub amount: Option<Number>,
        #[serde(
            default,
            deserialize_with = "super::present",
            skip_serializing_if = "Option::is_none"
        )]
        pub description: Option<String>,
        pub date: String,
        #[serde(
            default,
            deserialize_with = "super::present",
            skip_serializing_if = "Option::is_none"
        )]
        pub wallet_id: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeView {
        #[serde(rename = "_id")]
        pub id: String,
        pub source: String,
        pub amount: Number,
        pub description: String,
        pub date: DateTime<Utc>,
        pub wallet_id: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeList {
        pub incomes: Vec<IncomeView>,
    }
}

#[cfg(test)]
mod tests {
    use super::{expense::ExpenseUpdate, income::IncomeUpdate};
    use serde_json::json;

    #[test]
    fn absent_update_fields_stay_none() {
        let update: ExpenseUpdate =
            serde_json::from_value(json!({ "date": "2024-01-01T00:00:00.000000" })).unwrap();
        assert!(update.amount.is_none());
        assert!(update.category.is_none());
        assert!(update.repeat_monthly.is_none());
    }

    #[test]
    fn present_update_fields_are_read() {
        let update: IncomeUpdate = serde_json::from_value(json!({
            "date": "2024-01-01T00:00:00.000000",
            "amount": 1000,
            "wallet_id": "A2"
        }))
        .unwrap();
        assert_eq!(update.amount, Some(1000.into()));
        assert_eq!(update.wallet_id.as_deref(), Some("A2"));
        assert!(update.source.is_none());
    }

    #[test]
    fn null_update_fields_are_rejected() {
        let expense = serde_json::from_value::<ExpenseUpdate>(json!({
            "date": "2024-01-01T00:00:00.000000",
            "amount": null
        }));
        assert!(expense.is_err());

        let income = serde_json::from_value::<IncomeUpdate>(json!({
            "date": "2024-01-01T00:00:00.000000",
            "wallet_id": null
        }));
        assert!(income.is_err());
    }
}
