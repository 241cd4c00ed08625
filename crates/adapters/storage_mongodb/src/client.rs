//! MongoDB client setup, liveness check and shutdown.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::document::DeviceDocument;
use crate::error::MongoStorageError;

/// Configuration for the MongoDB storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string (e.g. `mongodb://localhost:27017`).
    pub url: String,
    /// Database holding the device collection.
    pub database: String,
    /// Name of the device collection.
    pub collection: String,
    /// Bound on establishing the connection and answering the ping.
    pub connect_timeout: Duration,
}

impl Config {
    /// Build a [`Store`] from this configuration.
    ///
    /// Connects and issues a `ping` round-trip before returning, so a
    /// successful result means the server was reachable.
    ///
    /// # Errors
    ///
    /// Returns [`MongoStorageError`] if the connection string is invalid or
    /// the ping fails within `connect_timeout`.
    pub async fn connect(self) -> Result<Store, MongoStorageError> {
        Store::initialize(self).await
    }
}

/// Holds the MongoDB client and the device collection handle.
pub struct Store {
    client: Client,
    collection: Collection<DeviceDocument>,
}

impl Store {
    async fn initialize(config: Config) -> Result<Self, MongoStorageError> {
        let mut options = ClientOptions::parse(config.url.as_str()).await?;
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);
        database.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "connected to MongoDB"
        );

        Ok(Self {
            collection: database.collection(&config.collection),
            client,
        })
    }

    /// A handle on the device collection. Cheap to clone; every clone shares
    /// the same connection pool.
    #[must_use]
    pub fn collection(&self) -> Collection<DeviceDocument> {
        self.collection.clone()
    }

    /// Release the connection pool. Waits for in-flight operations that
    /// still hold a handle; never fails.
    pub async fn close(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB connection closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_reject_invalid_connection_string() {
        let config = Config {
            url: "not-a-mongodb-url".to_string(),
            database: "rfidgate".to_string(),
            collection: "devices".to_string(),
            connect_timeout: Duration::from_millis(100),
        };
        let result = config.connect().await;
        assert!(matches!(result, Err(MongoStorageError::Driver(_))));
    }

    #[tokio::test]
    async fn should_fail_fast_when_server_is_unreachable() {
        let config = Config {
            url: "mongodb://127.0.0.1:1/?directConnection=true".to_string(),
            database: "rfidgate".to_string(),
            collection: "devices".to_string(),
            connect_timeout: Duration::from_millis(200),
        };
        let result = config.connect().await;
        assert!(matches!(result, Err(MongoStorageError::Driver(_))));
    }
}
