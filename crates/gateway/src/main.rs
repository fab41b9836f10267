//! Model Repository - HTTP service and maintenance commands.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::StorageBackend;
use model_repository_lib::config::ModelRepositoryConfig;
use model_repository_lib::service::{LoggingHook, PersistenceHook};
use model_repository_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "model-repository")]
#[command(author, version, about = "Repository of IoT Systems, Vendors and Asset Categories")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(short = 'H', long, default_value = "0.0.0.0", env = "SERVER_HOST")]
        host: String,
        #[arg(short, long, default_value = "3000", env = "SERVER_PORT")]
        port: u16,
        /// Storage backend: mongo or relational
        #[arg(short, long, env = "STORAGE_BACKEND")]
        storage: Option<StorageBackend>,
    },
    /// Relational database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Replace all Systems with randomly named ones
    Seed {
        #[arg(short, long, default_value = "20")]
        count: usize,
        /// Storage backend: mongo or relational
        #[arg(short, long, env = "STORAGE_BACKEND")]
        storage: Option<StorageBackend>,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command).await {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let config = ModelRepositoryConfig::from_env();
    tracing::debug!("Configuration loaded");

    match command {
        Commands::Serve {
            host,
            port,
            storage,
        } => {
            let mut config = with_storage(config, storage);
            config.service.host = host;
            config.service.port = port;
            gateway_lib::run_server(config).await?;
        }
        Commands::Migrate { action } => {
            let action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            model_repository_lib::run_migrations(action, &config).await?;
        }
        Commands::Seed { count, storage } => {
            let config = with_storage(config, storage);
            let hooks: Vec<std::sync::Arc<dyn PersistenceHook>> =
                vec![std::sync::Arc::new(LoggingHook)];
            let (gateways, _) = model_repository_lib::connect(&config, &hooks).await?;

            let created = model_repository_lib::seed_systems(gateways.systems.as_ref(), count).await?;
            tracing::info!("Seeded {} Systems", created);
        }
    }

    Ok(())
}

fn with_storage(
    config: ModelRepositoryConfig,
    storage: Option<StorageBackend>,
) -> ModelRepositoryConfig {
    match storage {
        Some(storage) => config.with_storage(storage),
        None => config,
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
