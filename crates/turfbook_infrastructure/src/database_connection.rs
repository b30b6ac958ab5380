use mongodb::bson::doc;
use tokio::sync::OnceCell;

use turfbook_interface::errors::{AppError, Result};

use crate::settings::Database as DatabaseSettings;

pub type DatabaseConnection = mongodb::Database;

// One handle for the whole process, opened by whichever request gets there
// first. Concurrent first requests share a single connection attempt; a
// failed attempt leaves the cell empty so a later request retries.
static CONNECTION: OnceCell<DatabaseConnection> = OnceCell::const_new();

pub struct DatabaseManager;

impl DatabaseManager {
    pub async fn get_connection(settings: &DatabaseSettings) -> Result<&'static DatabaseConnection> {
        CONNECTION
            .get_or_try_init(|| async {
                Self::connect(settings).await.map_err(|e| {
                    tracing::error!("could not open the database connection: {}", e);
                    e
                })
            })
            .await
    }

    async fn connect(settings: &DatabaseSettings) -> Result<DatabaseConnection> {
        let db = mongodb::Client::with_uri_str(settings.uri.as_str())
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?
            .database(settings.name.as_str());

        db.run_command(doc! {"ping": 1}, None)
            .await
            .map_err(|e| AppError::MongoError { msg: e.to_string() })?;

        Ok(db)
    }
}
