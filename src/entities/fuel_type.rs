//! Fuel type entity - Fixed reference data naming a vehicle's energy source.
//!
//! Names are stored in their canonical form (e.g. `"Gasoline"`). Display
//! aliases such as `"Petrol"` live in [`crate::core::fuel`], never in the table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fuel type database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fuel_types")]
pub struct Model {
    /// Unique identifier, assigned by the seed data
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    /// Canonical name (e.g. `"Diesel"`, `"Gasoline"`)
    #[sea_orm(unique)]
    pub name: String,
}

/// Defines relationships between `FuelType` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One fuel type is used by many vehicles
    #[sea_orm(has_many = "super::vehicle::Entity")]
    Vehicles,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
