use mongodb::{
    bson::doc,
    options::ClientOptions,
    Client as MongoClient, Database,
};

use crate::error::AppError;

/// Owns the shared MongoDB client and database handle for the process.
///
/// Built once at startup and injected into the application state; there is no
/// ambient global connection.
#[derive(Clone)]
pub struct ProductDb {
    client: MongoClient,
    db: Database,
}

impl ProductDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::DatabaseError(e.into())
        })?;
        client_options.app_name = Some("product-service".to_string());

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::DatabaseError(e.into())
        })?;
        let db = client.database(database);

        // The driver defers I/O until first use; ping now so an unreachable
        // store aborts startup instead of failing on every request.
        let connector = Self { client, db };
        connector.health_check().await.map_err(|e| {
            tracing::error!("Failed to reach MongoDB at startup: {}", e);
            e
        })?;

        tracing::info!(database = %database, "Connected to MongoDB database");
        Ok(connector)
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
