//! Seeding of reference fuel types and the demo fleet.
//!
//! Runs in a single database transaction and can be repeated: fuel types are
//! inserted only when their id is missing, vehicles are upserted by license
//! plate.

use crate::{
    config::fleet::FleetSeed,
    entities::{FuelType, Vehicle, fuel_type, vehicle},
    errors::Result,
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument};

/// Counts of what a seed run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Fuel types inserted
    pub fuel_types_created: usize,
    /// Fuel types already present and left untouched
    pub fuel_types_kept: usize,
    /// Vehicles inserted
    pub vehicles_created: usize,
    /// Vehicles whose existing row was overwritten
    pub vehicles_updated: usize,
}

/// Writes `seed` to the database.
///
/// # Errors
/// Returns an error if any statement fails; nothing is committed in that case.
#[instrument(skip_all, fields(fuel_types = seed.fuel_types.len(), vehicles = seed.vehicles.len()))]
pub async fn seed_fleet(db: &DatabaseConnection, seed: &FleetSeed) -> Result<SeedReport> {
    seed.validate()?;
    let txn = db.begin().await?;
    let mut report = SeedReport::default();

    for fuel in &seed.fuel_types {
        if FuelType::find_by_id(fuel.id).one(&txn).await?.is_some() {
            debug!(id = fuel.id, name = %fuel.name, "fuel type already present");
            report.fuel_types_kept += 1;
            continue;
        }
        fuel_type::ActiveModel {
            id: Set(fuel.id),
            name: Set(fuel.name.clone()),
        }
        .insert(&txn)
        .await?;
        report.fuel_types_created += 1;
    }

    for car in &seed.vehicles {
        let existing = Vehicle::find()
            .filter(vehicle::Column::LicensePlate.eq(car.license_plate.as_str()))
            .one(&txn)
            .await?;

        if let Some(model) = existing {
            let mut active: vehicle::ActiveModel = model.into();
            active.brand = Set(car.brand.clone());
            active.year = Set(car.year);
            active.driver_name = Set(car.driver_name.clone());
            active.fuel_type_id = Set(car.fuel_type_id);
            active.update(&txn).await?;
            debug!(plate = %car.license_plate, "vehicle updated");
            report.vehicles_updated += 1;
        } else {
            vehicle::ActiveModel {
                brand: Set(car.brand.clone()),
                license_plate: Set(car.license_plate.clone()),
                year: Set(car.year),
                driver_name: Set(car.driver_name.clone()),
                fuel_type_id: Set(car.fuel_type_id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            report.vehicles_created += 1;
        }
    }

    txn.commit().await?;
    info!(
        fuel_types_created = report.fuel_types_created,
        vehicles_created = report.vehicles_created,
        vehicles_updated = report.vehicles_updated,
        "Fleet seed applied"
    );
    Ok(report)
}
