use std::net::SocketAddr;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use turfbook_infrastructure::services::ServiceRegistry;
use turfbook_infrastructure::settings::Settings;

use crate::endpoints::bookings_endpoints::BookingsRouter;
use crate::endpoints::purchases_endpoints::PurchasesRouter;
use crate::endpoints::reviews_endpoints::ReviewsRouter;
use crate::logger;

pub struct ApplicationController;

impl ApplicationController {
    pub async fn run(settings: Settings, service_registry: ServiceRegistry) {
        logger::setup(&settings.logger.level);

        let router = Self::build(service_registry);

        let listener =
            tokio::net::TcpListener::bind(&format!("127.0.0.1:{}", settings.server.port))
                .await
                .expect("Could not start the TCP listener");

        tracing::info!("listening on {}", settings.server);

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Failed to start the server");
    }

    pub fn build(service_registry: ServiceRegistry) -> Router {
        Router::new()
            .nest(
                "/api",
                Router::new()
                    .route("/test", get(Self::test))
                    .merge(BookingsRouter::new(service_registry.clone()))
                    .merge(ReviewsRouter::new(service_registry.clone()))
                    .merge(PurchasesRouter::new(service_registry)),
            )
            // logging so we can see whats going on
            .layer(TraceLayer::new_for_http())
            // The front end is served from another origin.
            .layer(CorsLayer::permissive())
    }

    async fn test() -> Json<MessageResponse> {
        Json(MessageResponse {
            message: "API is up and running".to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}
