//! Seed data loading from fleet.toml
//!
//! The reference fuel types and the demo vehicles are declared in a TOML file
//! and written to the database by [`crate::core::seed`].

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire fleet.toml file
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FleetSeed {
    /// Fuel types, keyed by their fixed id
    #[serde(default)]
    pub fuel_types: Vec<FuelTypeSeed>,
    /// Vehicles, keyed by license plate
    #[serde(default)]
    pub vehicles: Vec<VehicleSeed>,
}

/// A single fuel type row
#[derive(Debug, Deserialize, Clone)]
pub struct FuelTypeSeed {
    /// Fixed identifier
    pub id: i32,
    /// Canonical name
    pub name: String,
}

/// A single vehicle row
#[derive(Debug, Deserialize, Clone)]
pub struct VehicleSeed {
    /// Manufacturer
    pub brand: String,
    /// Registration plate; the upsert key
    pub license_plate: String,
    /// Model year
    pub year: i32,
    /// Fuel type id, must be one of `fuel_types`
    pub fuel_type_id: i32,
    /// Assigned driver
    #[serde(default)]
    pub driver_name: Option<String>,
}

impl FleetSeed {
    /// Checks that every vehicle references a declared fuel type.
    ///
    /// # Errors
    /// Returns `Error::Config` naming the first vehicle with an unknown fuel type.
    pub fn validate(&self) -> Result<()> {
        for vehicle in &self.vehicles {
            if !self.fuel_types.iter().any(|f| f.id == vehicle.fuel_type_id) {
                return Err(Error::Config {
                    message: format!(
                        "Vehicle {} references unknown fuel type id {}",
                        vehicle.license_plate, vehicle.fuel_type_id
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Parses seed data from a TOML string and validates it.
///
/// # Errors
/// Returns an error if the TOML is malformed or references are dangling.
pub fn parse_fleet_seed(contents: &str) -> Result<FleetSeed> {
    let seed: FleetSeed = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse fleet seed: {e}"),
    })?;
    seed.validate()?;
    Ok(seed)
}

/// Loads seed data from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A vehicle references an undeclared fuel type
pub fn load_fleet_seed<P: AsRef<Path>>(path: P) -> Result<FleetSeed> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!(
            "Failed to read fleet seed {}: {e}",
            path.as_ref().display()
        ),
    })?;
    parse_fleet_seed(&contents)
}
