//! Model repository configuration.

use std::env;

use common::{DatabaseConfig, DocumentStoreConfig, ServiceConfig, StorageBackend};

/// Model repository configuration.
#[derive(Debug, Clone, Default)]
pub struct ModelRepositoryConfig {
    /// HTTP binding
    pub service: ServiceConfig,
    /// Active persistence backend
    pub storage: StorageBackend,
    /// Relational backend settings
    pub database: DatabaseConfig,
    /// MongoDB backend settings
    pub document_store: DocumentStoreConfig,
}

impl ModelRepositoryConfig {
    /// Load configuration from environment variables.
    ///
    /// An unrecognised `STORAGE_BACKEND` falls back to the default backend
    /// with a warning.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let storage = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, defaults.storage);
                defaults.storage
            }),
            Err(_) => defaults.storage,
        };

        Self {
            service: ServiceConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.service.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.service.port),
                ..defaults.service
            },
            storage,
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(defaults.database.url),
            },
            document_store: DocumentStoreConfig {
                uri: env::var("MONGODB_URI").unwrap_or(defaults.document_store.uri),
                database: env::var("MONGODB_DATABASE")
                    .unwrap_or(defaults.document_store.database),
            },
        }
    }

    /// Override the backend chosen by the environment.
    pub fn with_storage(mut self, storage: StorageBackend) -> Self {
        self.storage = storage;
        self
    }
}
