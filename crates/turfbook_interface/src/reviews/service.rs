use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Result;
use crate::JsonObject;

#[async_trait]
pub trait ReviewsService {
    /// All reviews, most recent caller-supplied `timestamp` first.
    async fn list_reviews(&self) -> Result<Vec<Value>>;
    async fn create_review(&self, fields: JsonObject) -> Result<Value>;
}

pub type ReviewsServiceHandle = Arc<dyn ReviewsService + Send + Sync>;
