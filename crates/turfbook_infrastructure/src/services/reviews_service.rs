use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;
use serde_json::Value;

use turfbook_interface::errors::{AppError, Result};
use turfbook_interface::reviews::service::ReviewsService;
use turfbook_interface::JsonObject;

use crate::database_connection::{DatabaseConnection, DatabaseManager};
use crate::documents::{document_from_json, json_from_document};
use crate::settings::Database as DatabaseSettings;

const REVIEWS_COLLECTION: &str = "reviews";

#[derive(Clone)]
pub struct MongoReviewsService {
    database: DatabaseSettings,
}

impl MongoReviewsService {
    pub fn new(database: DatabaseSettings) -> Self {
        Self { database }
    }

    async fn connection(&self) -> Result<&'static DatabaseConnection> {
        DatabaseManager::get_connection(&self.database).await
    }
}

#[async_trait]
impl ReviewsService for MongoReviewsService {
    async fn list_reviews(&self) -> Result<Vec<Value>> {
        let collection = self
            .connection()
            .await?
            .collection::<Document>(REVIEWS_COLLECTION);

        // The sort key is whatever `timestamp` the caller stored, so the
        // order is only as trustworthy as the client input.
        let options = FindOptions::builder().sort(doc! {"timestamp": -1}).build();

        let cursor = collection
            .find(None, options)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        let reviews: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        Ok(reviews.into_iter().map(json_from_document).collect())
    }

    async fn create_review(&self, fields: JsonObject) -> Result<Value> {
        let collection = self
            .connection()
            .await?
            .collection::<Document>(REVIEWS_COLLECTION);

        // Stored exactly as sent, no server timestamp.
        let review = document_from_json(fields)?;

        let inserted = collection
            .insert_one(review, None)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        let stored = collection
            .find_one(doc! {"_id": inserted.inserted_id.clone()}, None)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        stored
            .map(json_from_document)
            .ok_or_else(|| AppError::CustomError {
                msg: format!("no review found for the id: {}", inserted.inserted_id),
            })
    }
}
