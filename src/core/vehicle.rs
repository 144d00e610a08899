//! Vehicle and fuel type queries.
//!
//! Reads only. Vehicles always come back joined with their fuel type so the
//! fuel type filter and sort can reference the related name.

use crate::{
    core::filter::{Ordering, VehicleFilter},
    core::fuel::display_fuel_name,
    entities::{FuelType, Vehicle, fuel_type, vehicle},
    errors::Result,
};
use sea_orm::{QueryOrder, prelude::*};
use serde::Serialize;
use tracing::{debug, instrument};

/// Fuel type as presented to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelTypeView {
    /// Fuel type id
    pub id: i32,
    /// Canonical stored name
    pub name: String,
    /// Name shown to merchants (`Gasoline` becomes `Petrol`)
    pub display_name: String,
}

impl From<fuel_type::Model> for FuelTypeView {
    fn from(model: fuel_type::Model) -> Self {
        let display_name = display_fuel_name(&model.name).to_string();
        Self {
            id: model.id,
            name: model.name,
            display_name,
        }
    }
}

/// One row of the vehicle table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRow {
    /// Vehicle id
    pub id: i32,
    /// Manufacturer
    pub brand: String,
    /// Registration plate
    pub license_plate: String,
    /// Model year
    pub year: i32,
    /// Assigned driver, if any
    pub driver_name: Option<String>,
    /// Driver cell text; `-` when no driver is assigned
    pub driver_label: String,
    /// Related fuel type
    pub fuel_type: Option<FuelTypeView>,
}

impl From<(vehicle::Model, Option<fuel_type::Model>)> for VehicleRow {
    fn from((vehicle, fuel_type): (vehicle::Model, Option<fuel_type::Model>)) -> Self {
        let driver_label = vehicle.driver_name.clone().unwrap_or_else(|| "-".to_string());
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            license_plate: vehicle.license_plate,
            year: vehicle.year,
            driver_name: vehicle.driver_name,
            driver_label,
            fuel_type: fuel_type.map(FuelTypeView::from),
        }
    }
}

/// Lists every vehicle matching `filter`, in `ordering`.
///
/// Unbounded: the whole matching set is returned.
#[instrument(skip(db))]
pub async fn list_vehicles(
    db: &DatabaseConnection,
    filter: &VehicleFilter,
    ordering: &Ordering,
) -> Result<Vec<VehicleRow>> {
    let mut query = Vehicle::find().find_also_related(FuelType);
    if !filter.is_universal() {
        query = query.filter(filter.condition());
    }
    let rows = ordering.apply(query).all(db).await?;
    debug!(count = rows.len(), "vehicles loaded");
    Ok(rows.into_iter().map(VehicleRow::from).collect())
}

/// Lists all fuel types ordered by canonical name.
pub async fn list_fuel_types(db: &DatabaseConnection) -> Result<Vec<fuel_type::Model>> {
    FuelType::find()
        .order_by_asc(fuel_type::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}
