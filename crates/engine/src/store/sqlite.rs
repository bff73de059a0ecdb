//! Embedded document backend on SQLite.
//!
//! Documents are BSON encoded into the `documents` table, one row per
//! document, keyed by `(collection, id)`. The find-and-modify operations read
//! and write inside one database transaction.

use std::time::Duration;

use bson::{Document, doc, oid::ObjectId};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveValue, ConnectOptions, Database, QueryFilter, TransactionTrait, entity::prelude::*,
};

use crate::{EngineError, ResultEngine};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub collection: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub body: Vec<u8>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub(super) async fn connect(uri: &str, timeout: Duration) -> ResultEngine<DatabaseConnection> {
    let mut options = ConnectOptions::new(uri.to_string());
    options.connect_timeout(timeout);

    let database = Database::connect(options).await?;
    Migrator::up(&database, None).await?;

    Ok(database)
}

fn encode(document: &Document) -> ResultEngine<Vec<u8>> {
    Ok(bson::to_vec(document)?)
}

fn decode(model: &Model) -> ResultEngine<Document> {
    bson::from_slice(&model.body).map_err(|err| EngineError::MalformedDocument {
        id: model.id.clone(),
        reason: err.to_string(),
    })
}

#[derive(Clone, Debug)]
pub struct SqliteCollection {
    database: DatabaseConnection,
    name: String,
}

impl SqliteCollection {
    pub(super) fn new(database: DatabaseConnection, name: &str) -> Self {
        Self {
            database,
            name: name.to_string(),
        }
    }

    fn key(&self, id: ObjectId) -> (String, String) {
        (self.name.clone(), id.to_hex())
    }

    pub(super) async fn insert_one(&self, document: Document) -> ResultEngine<ObjectId> {
        let id = document
            .get_object_id("_id")
            .unwrap_or_else(|_| ObjectId::new());

        let mut stored = doc! { "_id": id };
        for (key, value) in document {
            if key != "_id" {
                stored.insert(key, value);
            }
        }

        let model = ActiveModel {
            collection: ActiveValue::Set(self.name.clone()),
            id: ActiveValue::Set(id.to_hex()),
            body: ActiveValue::Set(encode(&stored)?),
        };
        Entity::insert(model)
            .exec_without_returning(&self.database)
            .await?;

        Ok(id)
    }

    pub(super) async fn find_all(&self) -> ResultEngine<Vec<Document>> {
        Entity::find()
            .filter(Column::Collection.eq(self.name.as_str()))
            .all(&self.database)
            .await?
            .iter()
            .map(decode)
            .collect()
    }

    pub(super) async fn find_one(&self, id: ObjectId) -> ResultEngine<Option<Document>> {
        Entity::find_by_id(self.key(id))
            .one(&self.database)
            .await?
            .as_ref()
            .map(decode)
            .transpose()
    }

    pub(super) async fn find_one_and_update(
        &self,
        id: ObjectId,
        set: Document,
    ) -> ResultEngine<Option<Document>> {
        let db_tx = self.database.begin().await?;
        let Some(model) = Entity::find_by_id(self.key(id)).one(&db_tx).await? else {
            return Ok(None);
        };

        let before = decode(&model)?;
        let mut after = before.clone();
        for (key, value) in set {
            after.insert(key, value);
        }

        let mut model: ActiveModel = model.into();
        model.body = ActiveValue::Set(encode(&after)?);
        model.update(&db_tx).await?;
        db_tx.commit().await?;

        Ok(Some(before))
    }

    pub(super) async fn find_one_and_delete(&self, id: ObjectId) -> ResultEngine<Option<Document>> {
        let db_tx = self.database.begin().await?;
        let Some(model) = Entity::find_by_id(self.key(id)).one(&db_tx).await? else {
            return Ok(None);
        };

        let before = decode(&model)?;
        Entity::delete_by_id(self.key(id)).exec(&db_tx).await?;
        db_tx.commit().await?;

        Ok(Some(before))
    }
}
