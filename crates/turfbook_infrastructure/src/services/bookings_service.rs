use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson, DateTime, Document};
use mongodb::options::FindOptions;
use serde_json::Value;

use turfbook_interface::bookings::model::BookedSlots;
use turfbook_interface::bookings::service::BookingsService;
use turfbook_interface::errors::{AppError, Result};
use turfbook_interface::JsonObject;

use crate::database_connection::{DatabaseConnection, DatabaseManager};
use crate::documents::{document_from_json, json_from_document, normalize_day};
use crate::settings::Database as DatabaseSettings;

const BOOKINGS_COLLECTION: &str = "bookings";

#[derive(Clone)]
pub struct MongoBookingsService {
    database: DatabaseSettings,
}

impl MongoBookingsService {
    pub fn new(database: DatabaseSettings) -> Self {
        Self { database }
    }

    async fn connection(&self) -> Result<&'static DatabaseConnection> {
        DatabaseManager::get_connection(&self.database).await
    }
}

#[async_trait]
impl BookingsService for MongoBookingsService {
    async fn list_bookings(&self) -> Result<Vec<Value>> {
        let collection = self
            .connection()
            .await?
            .collection::<Document>(BOOKINGS_COLLECTION);

        // Most recent date first; ties keep the store's order.
        let options = FindOptions::builder().sort(doc! {"date": -1}).build();

        let cursor = collection
            .find(None, options)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        let bookings: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        Ok(bookings.into_iter().map(json_from_document).collect())
    }

    async fn create_booking(&self, fields: JsonObject) -> Result<Value> {
        let collection = self
            .connection()
            .await?
            .collection::<Document>(BOOKINGS_COLLECTION);

        let mut booking = document_from_json(fields)?;
        booking.insert("createdAt", Bson::DateTime(DateTime::now()));

        let inserted = collection
            .insert_one(booking, None)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        // Read the booking back so the response reflects the stored form.
        let stored = collection
            .find_one(doc! {"_id": inserted.inserted_id.clone()}, None)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        stored
            .map(json_from_document)
            .ok_or_else(|| AppError::CustomError {
                msg: format!("no booking found for the id: {}", inserted.inserted_id),
            })
    }

    async fn booked_slots(&self) -> Result<BookedSlots> {
        let collection = self
            .connection()
            .await?
            .collection::<Document>(BOOKINGS_COLLECTION);

        // Only the three grouping fields are fetched.
        let options = FindOptions::builder()
            .projection(doc! {"_id": 0, "groundId": 1, "date": 1, "slot": 1})
            .build();

        let cursor = collection
            .find(None, options)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        let bookings: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        Ok(group_booked_slots(bookings))
    }
}

// Records that do not name a day, a ground, and a slot are skipped rather
// than failing the whole read: the collection accepts arbitrary documents.
fn group_booked_slots(bookings: Vec<Document>) -> BookedSlots {
    let mut booked = BookedSlots::new();

    for booking in bookings {
        let Some(day) = booking.get("date").and_then(normalize_day) else {
            continue;
        };
        let Ok(ground) = booking.get_str("groundId") else {
            continue;
        };
        let Ok(slot) = booking.get_str("slot") else {
            continue;
        };

        booked
            .entry(ground.to_string())
            .or_default()
            .entry(day)
            .or_default()
            .push(slot.to_string());
    }

    booked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_group_by_ground_and_day_in_store_order() {
        let bookings = vec![
            doc! {"groundId": "A", "date": "2024-06-01", "slot": "10-11"},
            doc! {"groundId": "A", "date": "2024-06-01", "slot": "11-12"},
        ];

        let booked = group_booked_slots(bookings);

        assert_eq!(booked.len(), 1);
        assert_eq!(
            booked["A"]["2024-06-01"],
            vec!["10-11".to_string(), "11-12".to_string()]
        );
    }

    #[test]
    fn grounds_and_days_get_their_own_entries() {
        let bookings = vec![
            doc! {"groundId": "A", "date": "2024-06-01", "slot": "10-11"},
            doc! {"groundId": "B", "date": "2024-06-01", "slot": "10-11"},
            doc! {"groundId": "A", "date": "2024-06-02", "slot": "09-10"},
        ];

        let booked = group_booked_slots(bookings);

        assert_eq!(booked["A"]["2024-06-01"], vec!["10-11".to_string()]);
        assert_eq!(booked["A"]["2024-06-02"], vec!["09-10".to_string()]);
        assert_eq!(booked["B"]["2024-06-01"], vec!["10-11".to_string()]);
    }

    #[test]
    fn offset_dates_land_on_their_utc_day() {
        let bookings = vec![doc! {
            "groundId": "A",
            "date": "2024-06-01T22:00:00-05:00",
            "slot": "10-11",
        }];

        let booked = group_booked_slots(bookings);

        assert!(booked["A"].contains_key("2024-06-02"));
    }

    #[test]
    fn malformed_records_are_skipped() {
        let bookings = vec![
            doc! {"groundId": "A", "slot": "10-11"},
            doc! {"groundId": "A", "date": "whenever", "slot": "10-11"},
            doc! {"groundId": "A", "date": "2024-06-01"},
            doc! {"groundId": 7, "date": "2024-06-01", "slot": "10-11"},
            doc! {"groundId": "A", "date": "2024-06-01", "slot": "12-13"},
        ];

        let booked = group_booked_slots(bookings);

        assert_eq!(booked["A"]["2024-06-01"], vec!["12-13".to_string()]);
    }

    #[test]
    fn no_bookings_means_an_empty_map() {
        assert!(group_booked_slots(Vec::new()).is_empty());
    }
}
