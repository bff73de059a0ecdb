use std::time::Duration;

use bson::{Document, doc, oid::ObjectId};
use mongodb::{Client, Database, options::ClientOptions};

use super::DATABASE_NAME;
use crate::{EngineError, ResultEngine};

/// Connect and ping, so an unreachable server fails here rather than on the
/// first request.
pub(super) async fn connect(uri: &str, timeout: Duration) -> ResultEngine<Database> {
    let mut options = ClientOptions::parse(uri).await?;
    options.server_selection_timeout = Some(timeout);
    options.connect_timeout = Some(timeout);

    let client = Client::with_options(options)?;
    let database = client.database(DATABASE_NAME);
    database.run_command(doc! { "ping": 1 }).await?;

    Ok(database)
}

#[derive(Clone, Debug)]
pub struct MongoCollection {
    inner: mongodb::Collection<Document>,
}

impl MongoCollection {
    pub(super) fn new(database: &Database, name: &str) -> Self {
        Self {
            inner: database.collection(name),
        }
    }

    pub(super) async fn insert_one(&self, document: Document) -> ResultEngine<ObjectId> {
        let result = self.inner.insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| EngineError::MalformedDocument {
                id: result.inserted_id.to_string(),
                reason: "identifier is not an ObjectId".to_string(),
            })
    }

    pub(super) async fn find_all(&self) -> ResultEngine<Vec<Document>> {
        let mut cursor = self.inner.find(doc! {}).await?;
        let mut documents = Vec::new();
        while cursor.advance().await? {
            documents.push(cursor.deserialize_current()?);
        }
        Ok(documents)
    }

    pub(super) async fn find_one(&self, id: ObjectId) -> ResultEngine<Option<Document>> {
        Ok(self.inner.find_one(doc! { "_id": id }).await?)
    }

    pub(super) async fn find_one_and_update(
        &self,
        id: ObjectId,
        set: Document,
    ) -> ResultEngine<Option<Document>> {
        Ok(self
            .inner
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .await?)
    }

    pub(super) async fn find_one_and_delete(&self, id: ObjectId) -> ResultEngine<Option<Document>> {
        Ok(self.inner.find_one_and_delete(doc! { "_id": id }).await?)
    }
}
