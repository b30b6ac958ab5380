use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde_json::Value;

use turfbook_infrastructure::services::ServiceRegistry;
use turfbook_interface::errors::Result;
use turfbook_interface::reviews::service::ReviewsServiceHandle;
use turfbook_interface::JsonObject;

pub struct ReviewsRouter;

impl ReviewsRouter {
    pub fn new(service_registry: ServiceRegistry) -> Router {
        Router::new()
            .route("/reviews", get(Self::list_reviews).post(Self::create_review))
            .with_state(service_registry)
    }

    async fn list_reviews(
        State(reviews_service): State<ReviewsServiceHandle>,
    ) -> Result<Json<Vec<Value>>> {
        reviews_service.list_reviews().await.map(Json)
    }

    async fn create_review(
        State(reviews_service): State<ReviewsServiceHandle>,
        Json(body): Json<JsonObject>,
    ) -> Result<(StatusCode, Json<Value>)> {
        let review = reviews_service.create_review(body).await?;

        Ok((StatusCode::CREATED, Json(review)))
    }
}
