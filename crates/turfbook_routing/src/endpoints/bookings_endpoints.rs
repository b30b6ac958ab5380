use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde_json::Value;

use turfbook_infrastructure::services::ServiceRegistry;
use turfbook_interface::bookings::model::BookedSlots;
use turfbook_interface::bookings::service::BookingsServiceHandle;
use turfbook_interface::errors::Result;
use turfbook_interface::JsonObject;

pub struct BookingsRouter;

impl BookingsRouter {
    pub fn new(service_registry: ServiceRegistry) -> Router {
        Router::new()
            .route(
                "/bookings",
                get(Self::list_bookings).post(Self::create_booking),
            )
            .route("/booked-slots", get(Self::booked_slots))
            .with_state(service_registry)
    }

    // All bookings, most recent date first.
    async fn list_bookings(
        State(bookings_service): State<BookingsServiceHandle>,
    ) -> Result<Json<Vec<Value>>> {
        bookings_service.list_bookings().await.map(Json)
    }

    // Nothing checks that the requested slot is still free; callers race and
    // are expected to consult /booked-slots first.
    async fn create_booking(
        State(bookings_service): State<BookingsServiceHandle>,
        Json(body): Json<JsonObject>,
    ) -> Result<(StatusCode, Json<Value>)> {
        let booking = bookings_service.create_booking(body).await?;

        Ok((StatusCode::CREATED, Json(booking)))
    }

    // The occupied time slots of every ground, grouped by UTC day. This is
    // what the front end renders to grey out taken slots.
    async fn booked_slots(
        State(bookings_service): State<BookingsServiceHandle>,
    ) -> Result<Json<BookedSlots>> {
        bookings_service.booked_slots().await.map(Json)
    }
}
