use bson::{Bson, Document};
use serde::de::DeserializeOwned;
use serde_json::Number;

use crate::{EngineError, ResultEngine};

mod expenses;
mod incomes;

/// Read a stored document into a record.
///
/// Strict: a missing or mistyped field fails with `MalformedDocument`
/// instead of being defaulted.
fn decode<T: DeserializeOwned>(document: Document) -> ResultEngine<T> {
    let id = match document.get("_id") {
        Some(Bson::ObjectId(id)) => id.to_hex(),
        Some(other) => other.to_string(),
        None => "<missing _id>".to_string(),
    };

    bson::from_document(document).map_err(|err| EngineError::MalformedDocument {
        id,
        reason: err.to_string(),
    })
}

fn amount_to_bson(amount: &Number) -> ResultEngine<Bson> {
    Ok(bson::to_bson(amount)?)
}
