//! Conversions between the open JSON records at the HTTP boundary and the
//! BSON documents the store keeps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use mongodb::bson::{self, Bson, Document};
use serde_json::Value;

use turfbook_interface::errors::{AppError, Result};
use turfbook_interface::JsonObject;

/// Builds the document to insert from the caller's fields, as-is.
pub fn document_from_json(fields: JsonObject) -> Result<Document> {
    bson::to_document(&fields).map_err(|e| AppError::BsonError { msg: e.to_string() })
}

/// Renders a stored document the way the HTTP layer returns it: object ids
/// become hex strings and datetimes RFC 3339 strings, everything else the
/// plain JSON it round-tripped from.
pub fn json_from_document(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, json_from_bson(value)))
            .collect(),
    )
}

fn json_from_bson(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(moment) => moment
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or(Value::Null),
        Bson::Document(document) => json_from_document(document),
        Bson::Array(values) => Value::Array(values.into_iter().map(json_from_bson).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// UTC calendar day (`YYYY-MM-DD`) named by a stored `date` value, or `None`
/// when the value does not name a point in time.
pub fn normalize_day(value: &Bson) -> Option<String> {
    match value {
        Bson::DateTime(moment) => format_day(moment.timestamp_millis()),
        Bson::Int64(millis) => format_day(*millis),
        Bson::String(raw) => parse_day(raw),
        _ => None,
    }
}

fn format_day(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|moment| moment.format("%Y-%m-%d").to_string())
}

fn parse_day(raw: &str) -> Option<String> {
    if let Ok(moment) = DateTime::parse_from_rfc3339(raw) {
        return Some(moment.with_timezone(&Utc).format("%Y-%m-%d").to_string());
    }

    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(day.format("%Y-%m-%d").to_string());
    }

    // A datetime without an offset is read as UTC.
    if let Ok(moment) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(moment.format("%Y-%m-%d").to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use mongodb::bson::{doc, DateTime as BsonDateTime};
    use serde_json::json;

    // 2024-06-01T00:00:00Z
    const JUNE_FIRST_MILLIS: i64 = 1_717_200_000_000;

    #[test]
    fn stored_documents_render_as_plain_json() {
        let id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        let document = doc! {
            "_id": id,
            "groundId": "A",
            "qty": 2_i32,
            "confirmed": true,
            "details": { "slots": ["10-11", "11-12"] },
            "createdAt": BsonDateTime::from_millis(JUNE_FIRST_MILLIS),
        };

        let value = json_from_document(document);

        assert_eq!(value["_id"], json!("507f1f77bcf86cd799439011"));
        assert_eq!(value["groundId"], json!("A"));
        assert_eq!(value["qty"], json!(2));
        assert_eq!(value["confirmed"], json!(true));
        assert_eq!(value["details"]["slots"], json!(["10-11", "11-12"]));

        let created_at = value["createdAt"].as_str().unwrap();
        assert!(created_at.starts_with("2024-06-01T00:00:00"));
    }

    #[test]
    fn caller_fields_survive_the_document_round_trip() {
        let fields: JsonObject =
            serde_json::from_value(json!({"groundId": "A", "date": "2024-06-01", "slot": "10-11"}))
                .unwrap();

        let document = document_from_json(fields).unwrap();

        assert_eq!(document.get_str("groundId").unwrap(), "A");
        assert_eq!(document.get_str("date").unwrap(), "2024-06-01");
        assert_eq!(document.get_str("slot").unwrap(), "10-11");
    }

    #[test]
    fn plain_dates_normalize_to_themselves() {
        let value = Bson::String("2024-06-01".to_string());
        assert_eq!(normalize_day(&value), Some("2024-06-01".to_string()));
    }

    #[test]
    fn offset_datetimes_normalize_to_the_utc_day() {
        let value = Bson::String("2024-06-01T22:00:00-05:00".to_string());
        assert_eq!(normalize_day(&value), Some("2024-06-02".to_string()));
    }

    #[test]
    fn bare_datetimes_are_read_as_utc() {
        let value = Bson::String("2024-06-01T22:00:00.000".to_string());
        assert_eq!(normalize_day(&value), Some("2024-06-01".to_string()));
    }

    #[test]
    fn stored_bson_datetimes_normalize() {
        let value = Bson::DateTime(BsonDateTime::from_millis(JUNE_FIRST_MILLIS));
        assert_eq!(normalize_day(&value), Some("2024-06-01".to_string()));
    }

    #[test]
    fn epoch_millis_normalize() {
        let value = Bson::Int64(JUNE_FIRST_MILLIS);
        assert_eq!(normalize_day(&value), Some("2024-06-01".to_string()));
    }

    #[test]
    fn unparseable_dates_normalize_to_none() {
        assert_eq!(normalize_day(&Bson::String("next friday".to_string())), None);
        assert_eq!(normalize_day(&Bson::Null), None);
        assert_eq!(normalize_day(&Bson::Boolean(true)), None);
    }
}
