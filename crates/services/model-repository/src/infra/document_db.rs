//! MongoDB client wrapper.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Client, Database};

use common::{AppResult, DocumentStoreConfig, StorageBackend};

use super::StorageHealth;

/// Handle on the repository's MongoDB database
#[derive(Clone)]
pub struct DocumentDatabase {
    database: Database,
}

impl DocumentDatabase {
    /// Connect to the server and select the configured database.
    pub async fn connect(config: &DocumentStoreConfig) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        let database = client.database(&config.database);
        tracing::info!("Connected to MongoDB database '{}'", config.database);

        Ok(Self { database })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}

#[async_trait]
impl StorageHealth for DocumentDatabase {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Mongo
    }

    async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
