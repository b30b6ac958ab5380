use std::sync::Arc;

use axum::extract::FromRef;

use turfbook_interface::bookings::service::BookingsServiceHandle;
use turfbook_interface::purchases::service::PurchasesServiceHandle;
use turfbook_interface::reviews::service::ReviewsServiceHandle;

pub mod bookings_service;
pub mod purchases_service;
pub mod reviews_service;

use bookings_service::MongoBookingsService;
use purchases_service::MongoPurchasesService;
use reviews_service::MongoReviewsService;

use crate::settings::Settings;

#[derive(FromRef, Clone)]
pub struct ServiceRegistry {
    pub bookings_service: BookingsServiceHandle,
    pub reviews_service: ReviewsServiceHandle,
    pub purchases_service: PurchasesServiceHandle,
}

impl ServiceRegistry {
    // Services keep the database settings, not a live handle: the shared
    // connection is only opened once the first request needs it.
    pub fn new(settings: &Settings) -> Self {
        let bookings_service = Arc::new(MongoBookingsService::new(settings.database.clone()));
        let reviews_service = Arc::new(MongoReviewsService::new(settings.database.clone()));
        let purchases_service = Arc::new(MongoPurchasesService::new(settings.database.clone()));

        Self {
            bookings_service,
            reviews_service,
            purchases_service,
        }
    }
}
