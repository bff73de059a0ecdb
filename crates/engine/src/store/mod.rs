//! Document store adapter.
//!
//! A [`Store`] is opened once at startup from a connection URI and hands out
//! [`Collection`] handles bound to a single named collection. Two backends
//! speak the same document model (BSON documents keyed by an `ObjectId`):
//!
//! - `mongodb://` and `mongodb+srv://` URIs reach a MongoDB deployment.
//! - `sqlite:` URIs open an embedded store, handy for tests and local runs.

use std::time::Duration;

use bson::{Document, oid::ObjectId};
use sea_orm::DatabaseConnection;

use crate::{EngineError, ResultEngine};

mod mongo;
mod sqlite;

pub use mongo::MongoCollection;
pub use sqlite::SqliteCollection;

/// Logical database every collection lives in.
pub const DATABASE_NAME: &str = "myfinance";

/// How long `connect` waits for the server before giving up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub enum Store {
    Mongo(mongodb::Database),
    Sqlite(DatabaseConnection),
}

impl Store {
    /// Open the store behind `uri`, waiting at most `timeout` for it to
    /// answer.
    pub async fn connect(uri: &str, timeout: Duration) -> ResultEngine<Self> {
        if uri.starts_with("mongodb://") || uri.starts_with("mongodb+srv://") {
            let database = mongo::connect(uri, timeout).await?;
            tracing::info!("MongoDB is connected, using database {DATABASE_NAME}");
            Ok(Self::Mongo(database))
        } else if uri.starts_with("sqlite:") {
            let database = sqlite::connect(uri, timeout).await?;
            tracing::info!("SQLite document store is ready");
            Ok(Self::Sqlite(database))
        } else {
            // Only the scheme: the rest may carry credentials.
            let scheme = uri.split(':').next().unwrap_or_default();
            Err(EngineError::UnsupportedUri(scheme.to_string()))
        }
    }

    /// Handle bound to the collection `name`.
    pub fn collection(&self, name: &str) -> Collection {
        match self {
            Self::Mongo(database) => Collection::Mongo(MongoCollection::new(database, name)),
            Self::Sqlite(database) => {
                Collection::Sqlite(SqliteCollection::new(database.clone(), name))
            }
        }
    }
}

/// A single collection. Every operation is one atomic store operation.
#[derive(Clone, Debug)]
pub enum Collection {
    Mongo(MongoCollection),
    Sqlite(SqliteCollection),
}

impl Collection {
    /// Insert `document`, returning the identifier the store assigned.
    pub async fn insert_one(&self, document: Document) -> ResultEngine<ObjectId> {
        match self {
            Self::Mongo(collection) => collection.insert_one(document).await,
            Self::Sqlite(collection) => collection.insert_one(document).await,
        }
    }

    /// Every document, in the store's natural order.
    pub async fn find_all(&self) -> ResultEngine<Vec<Document>> {
        match self {
            Self::Mongo(collection) => collection.find_all().await,
            Self::Sqlite(collection) => collection.find_all().await,
        }
    }

    pub async fn find_one(&self, id: ObjectId) -> ResultEngine<Option<Document>> {
        match self {
            Self::Mongo(collection) => collection.find_one(id).await,
            Self::Sqlite(collection) => collection.find_one(id).await,
        }
    }

    /// Merge `set` into the document `id`. Fields missing from `set` are left
    /// untouched. Returns the document as it was before the update, or `None`
    /// when nothing matched.
    pub async fn find_one_and_update(
        &self,
        id: ObjectId,
        set: Document,
    ) -> ResultEngine<Option<Document>> {
        match self {
            Self::Mongo(collection) => collection.find_one_and_update(id, set).await,
            Self::Sqlite(collection) => collection.find_one_and_update(id, set).await,
        }
    }

    /// Remove the document `id`, returning it if it existed.
    pub async fn find_one_and_delete(&self, id: ObjectId) -> ResultEngine<Option<Document>> {
        match self {
            Self::Mongo(collection) => collection.find_one_and_delete(id).await,
            Self::Sqlite(collection) => collection.find_one_and_delete(id).await,
        }
    }
}
