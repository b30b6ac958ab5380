use async_trait::async_trait;
use mongodb::bson::{doc, Bson, DateTime, Document};
use serde_json::Value;

use turfbook_interface::errors::{AppError, Result};
use turfbook_interface::purchases::service::PurchasesService;
use turfbook_interface::JsonObject;

use crate::database_connection::{DatabaseConnection, DatabaseManager};
use crate::documents::{document_from_json, json_from_document};
use crate::settings::Database as DatabaseSettings;

const PURCHASES_COLLECTION: &str = "purchases";

// Accessory and refreshment purchases share the collection; the documents
// themselves tell them apart, not a schema field.
#[derive(Clone)]
pub struct MongoPurchasesService {
    database: DatabaseSettings,
}

impl MongoPurchasesService {
    pub fn new(database: DatabaseSettings) -> Self {
        Self { database }
    }

    async fn connection(&self) -> Result<&'static DatabaseConnection> {
        DatabaseManager::get_connection(&self.database).await
    }
}

#[async_trait]
impl PurchasesService for MongoPurchasesService {
    async fn create_purchase(&self, fields: JsonObject) -> Result<Value> {
        let collection = self
            .connection()
            .await?
            .collection::<Document>(PURCHASES_COLLECTION);

        let mut purchase = document_from_json(fields)?;
        purchase.insert("createdAt", Bson::DateTime(DateTime::now()));

        let inserted = collection
            .insert_one(purchase, None)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        let stored = collection
            .find_one(doc! {"_id": inserted.inserted_id.clone()}, None)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        stored
            .map(json_from_document)
            .ok_or_else(|| AppError::CustomError {
                msg: format!("no purchase found for the id: {}", inserted.inserted_id),
            })
    }
}
