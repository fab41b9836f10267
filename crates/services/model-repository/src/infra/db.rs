//! SQL database handle and schema management.

use std::collections::HashSet;

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityTrait, QueryOrder, Statement,
};
use sea_orm_migration::{seaql_migrations, MigratorTrait};

use common::{AppResult, DatabaseConfig, StorageBackend};

use super::migrations::Migrator;
use super::StorageHealth;

/// One schema migration and whether it has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// Handle on the repository's SQL database
#[derive(Clone)]
pub struct RelationalDatabase {
    connection: DatabaseConnection,
}

impl RelationalDatabase {
    /// Open a connection pool; the schema is left untouched.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let connection = Database::connect(&config.url).await?;
        tracing::info!("Connected to {:?} database", connection.get_database_backend());

        Ok(Self::new(connection))
    }

    pub fn new(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Apply every pending migration.
    pub async fn migrate_up(&self) -> AppResult<()> {
        Migrator::up(&self.connection, None).await?;
        Ok(())
    }

    /// Revert the most recent migration.
    pub async fn migrate_down(&self) -> AppResult<()> {
        Migrator::down(&self.connection, Some(1)).await?;
        Ok(())
    }

    /// Drop every table, then apply all migrations again.
    pub async fn migrate_fresh(&self) -> AppResult<()> {
        Migrator::fresh(&self.connection).await?;
        Ok(())
    }

    /// Known migrations in order, flagged with their applied state.
    pub async fn migration_states(&self) -> AppResult<Vec<MigrationState>> {
        let applied: HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|row| row.version)
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|migration| {
                let name = migration.name().to_string();
                MigrationState {
                    applied: applied.contains(&name),
                    name,
                }
            })
            .collect())
    }
}

#[async_trait]
impl StorageHealth for RelationalDatabase {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Relational
    }

    async fn ping(&self) -> AppResult<()> {
        let backend = self.connection.get_database_backend();
        self.connection
            .execute(Statement::from_string(backend, "SELECT 1"))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectOptions;

    async fn in_memory() -> RelationalDatabase {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1).sqlx_logging(false);
        RelationalDatabase::new(Database::connect(options).await.unwrap())
    }

    #[tokio::test]
    async fn test_migrations_up_down_and_fresh() {
        let db = in_memory().await;

        // The bookkeeping table is created by the first run.
        db.migrate_up().await.unwrap();
        let states = db.migration_states().await.unwrap();
        assert_eq!(states.len(), 2);
        assert!(states.iter().all(|state| state.applied));

        db.migrate_down().await.unwrap();
        let states = db.migration_states().await.unwrap();
        assert!(states[0].applied);
        assert!(!states[1].applied);

        db.migrate_fresh().await.unwrap();
        let states = db.migration_states().await.unwrap();
        assert!(states.iter().all(|state| state.applied));
    }

    #[tokio::test]
    async fn test_ping_reports_relational_backend() {
        let db = in_memory().await;
        assert_eq!(db.backend(), StorageBackend::Relational);
        assert!(db.ping().await.is_ok());
    }
}
