//! Coercion of the raw strings a client sends into store types.
//!
//! Dates arrive as naive ISO-8601 timestamps with a 1 to 6 digit fractional
//! part and are read as UTC. Identifiers arrive as the hex form of an
//! ObjectId.

use bson::oid::ObjectId;
use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{EngineError, ResultEngine};

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse a `YYYY-MM-DDTHH:MM:SS.ffffff` timestamp.
///
/// The fractional part is mandatory. Offsets and `Z` suffixes are rejected.
pub fn parse_date(raw: &str) -> ResultEngine<DateTime<Utc>> {
    let invalid = || EngineError::InvalidDate(raw.to_string());

    let (_, fraction) = raw.rsplit_once('.').ok_or_else(invalid)?;
    if fraction.is_empty() || fraction.len() > 6 || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    NaiveDateTime::parse_from_str(raw, DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| invalid())
}

/// Coerce the string form of an identifier into an `ObjectId`.
pub fn parse_id(raw: &str) -> ResultEngine<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| EngineError::InvalidId(raw.to_string()))
}
