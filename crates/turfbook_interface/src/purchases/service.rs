use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Result;
use crate::JsonObject;

// Purchases are write-only: there is no list endpoint for them.
#[async_trait]
pub trait PurchasesService {
    async fn create_purchase(&self, fields: JsonObject) -> Result<Value>;
}

pub type PurchasesServiceHandle = Arc<dyn PurchasesService + Send + Sync>;
