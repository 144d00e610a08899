//! Shared test utilities for the fleet desk.
//!
//! This module provides helpers for setting up in-memory test databases and a
//! small fixture fleet with known ids.

use crate::{
    entities::{fuel_type, vehicle},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Inserts a fuel type with a fixed id.
pub async fn create_test_fuel_type(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
) -> Result<fuel_type::Model> {
    fuel_type::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Inserts a vehicle; the id is assigned by the database.
pub async fn create_test_vehicle(
    db: &DatabaseConnection,
    brand: &str,
    license_plate: &str,
    year: i32,
    fuel_type_id: i32,
    driver_name: Option<&str>,
) -> Result<vehicle::Model> {
    vehicle::ActiveModel {
        brand: Set(brand.to_string()),
        license_plate: Set(license_plate.to_string()),
        year: Set(year),
        driver_name: Set(driver_name.map(str::to_string)),
        fuel_type_id: Set(fuel_type_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Sets up a database with three fuel types and four vehicles.
///
/// Fuel types: Gasoline (1), Diesel (2), Electric (3).
/// Vehicles, in id order:
/// * Toyota `ABC-1234`, 2020, Gasoline, John Smith
/// * Honda `XYZ-5678`, 2019, Gasoline, no driver
/// * Tesla `ELC-9999`, 2023, Electric, Bob Johnson
/// * Ford `DEF-2468`, 2021, Diesel, Alice Williams
pub async fn setup_with_fleet() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    create_test_fuel_type(&db, 1, "Gasoline").await?;
    create_test_fuel_type(&db, 2, "Diesel").await?;
    create_test_fuel_type(&db, 3, "Electric").await?;

    create_test_vehicle(&db, "Toyota", "ABC-1234", 2020, 1, Some("John Smith")).await?;
    create_test_vehicle(&db, "Honda", "XYZ-5678", 2019, 1, None).await?;
    create_test_vehicle(&db, "Tesla", "ELC-9999", 2023, 3, Some("Bob Johnson")).await?;
    create_test_vehicle(&db, "Ford", "DEF-2468", 2021, 2, Some("Alice Williams")).await?;
    Ok(db)
}
