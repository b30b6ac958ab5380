use turfbook_infrastructure::{services::ServiceRegistry, settings::Settings};

use turfbook_routing::router::ApplicationController;

#[tokio::main]
async fn main() {
    let settings = Settings::new().expect("Could not parse settings");

    // The database connection is opened lazily by the first request that
    // needs it, so the server comes up even when the store is down.
    let services = ServiceRegistry::new(&settings);

    ApplicationController::run(settings, services).await;
}
