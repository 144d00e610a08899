//! Database configuration module for the fleet desk.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! structs without hand-written SQL.

use crate::entities::{FuelType, Vehicle};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Default database location when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/fleet_desk.sqlite?mode=rwc";

/// Establishes a connection to the database at `database_url`.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database");
    let db = Database::connect(database_url).await?;
    info!("Database connection established");
    Ok(db)
}

/// Creates the `fuel_types` and `vehicles` tables if they do not exist yet.
///
/// Fuel types are created first because vehicles reference them.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut fuel_type_table = schema.create_table_from_entity(FuelType);
    fuel_type_table.if_not_exists();
    let mut vehicle_table = schema.create_table_from_entity(Vehicle);
    vehicle_table.if_not_exists();

    db.execute(builder.build(&fuel_type_table)).await?;
    db.execute(builder.build(&vehicle_table)).await?;

    debug!("Ensured fuel_types and vehicles tables exist");
    Ok(())
}
