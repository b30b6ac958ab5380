use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::bookings::model::BookedSlots;
use crate::errors::Result;
use crate::JsonObject;

#[async_trait]
pub trait BookingsService {
    async fn list_bookings(&self) -> Result<Vec<Value>>;
    async fn create_booking(&self, fields: JsonObject) -> Result<Value>;
    async fn booked_slots(&self) -> Result<BookedSlots>;
}

pub type BookingsServiceHandle = Arc<dyn BookingsService + Send + Sync>;
