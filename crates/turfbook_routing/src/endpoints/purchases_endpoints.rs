use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use serde_json::Value;

use turfbook_infrastructure::services::ServiceRegistry;
use turfbook_interface::errors::Result;
use turfbook_interface::purchases::service::PurchasesServiceHandle;
use turfbook_interface::JsonObject;

pub struct PurchasesRouter;

impl PurchasesRouter {
    pub fn new(service_registry: ServiceRegistry) -> Router {
        Router::new()
            .route("/purchases", post(Self::create_purchase))
            .with_state(service_registry)
    }

    async fn create_purchase(
        State(purchases_service): State<PurchasesServiceHandle>,
        Json(body): Json<JsonObject>,
    ) -> Result<(StatusCode, Json<Value>)> {
        let purchase = purchases_service.create_purchase(body).await?;

        Ok((StatusCode::CREATED, Json(purchase)))
    }
}
