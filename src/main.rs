use dotenvy::dotenv;
use fleet_desk::{
    config::{database, fleet, server::ServerConfig},
    core::seed,
    errors::{Error, Result},
    web,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Load the server configuration
    let config = ServerConfig::from_env()
        .inspect_err(|e| error!("Critical error loading configuration: {}", e))?;

    if config.database_url == database::DEFAULT_DATABASE_URL {
        std::fs::create_dir_all("data")?;
    }

    // 4. Connect and make sure the tables exist
    let db = database::create_connection(&config.database_url).await?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Seed, either as the whole job or before serving
    let command = std::env::args().nth(1);
    match command.as_deref() {
        Some("seed") => return run_seed(&config, &db).await,
        Some(other) => {
            return Err(Error::Config {
                message: format!("Unknown command {other:?}; expected `seed` or no argument"),
            });
        }
        None if config.seed_on_start => run_seed(&config, &db).await?,
        None => {}
    }

    // 6. Serve
    web::serve(&config, db).await
}

async fn run_seed(config: &ServerConfig, db: &sea_orm::DatabaseConnection) -> Result<()> {
    let seed_data = fleet::load_fleet_seed(&config.fleet_seed_path)?;
    seed::seed_fleet(db, &seed_data)
        .await
        .inspect(|report| info!(?report, "Seed finished"))
        .inspect_err(|e| error!("Failed to seed fleet: {}", e))?;
    Ok(())
}
