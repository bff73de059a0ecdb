//! The module contains the error the engine can throw.
//!
//! Only [`InvalidDate`] and [`InvalidId`] are caused by the caller's input.
//! Everything else is a store or data fault.
//!
//!  [`InvalidDate`]: EngineError::InvalidDate
//!  [`InvalidId`]: EngineError::InvalidId
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid date \"{0}\": expected YYYY-MM-DDTHH:MM:SS.ffffff")]
    InvalidDate(String),
    #[error("Invalid id \"{0}\": expected a 24 character hex ObjectId")]
    InvalidId(String),
    #[error("Malformed document {id}: {reason}")]
    MalformedDocument { id: String, reason: String },
    #[error("Unsupported store uri \"{0}\"")]
    UnsupportedUri(String),
    #[error("Bson error: {0}")]
    Bson(String),
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

impl From<bson::ser::Error> for EngineError {
    fn from(value: bson::ser::Error) -> Self {
        Self::Bson(value.to_string())
    }
}

impl From<bson::de::Error> for EngineError {
    fn from(value: bson::de::Error) -> Self {
        Self::Bson(value.to_string())
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidDate(a), Self::InvalidDate(b)) => a == b,
            (Self::InvalidId(a), Self::InvalidId(b)) => a == b,
            (
                Self::MalformedDocument { id: a, reason: r },
                Self::MalformedDocument { id: b, reason: s },
            ) => a == b && r == s,
            (Self::UnsupportedUri(a), Self::UnsupportedUri(b)) => a == b,
            (Self::Bson(a), Self::Bson(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            (Self::Mongo(a), Self::Mongo(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
