pub mod logger;
pub mod router;

pub mod endpoints {
    pub mod bookings_endpoints;
    pub mod purchases_endpoints;
    pub mod reviews_endpoints;
}
