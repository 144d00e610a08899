//! Vehicle entity - One car of the fleet.
//!
//! Vehicles are only written by the seed process; the listing page reads them
//! joined with their [`super::fuel_type`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Vehicle database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    /// Unique identifier, assigned by the database
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Manufacturer (e.g. "Toyota")
    pub brand: String,
    /// Registration plate, unique across the fleet
    #[sea_orm(unique)]
    pub license_plate: String,
    /// Model year
    pub year: i32,
    /// Assigned driver, if any
    pub driver_name: Option<String>,
    /// ID of the fuel type this vehicle runs on
    pub fuel_type_id: i32,
}

/// Defines relationships between Vehicle and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each vehicle belongs to one fuel type
    #[sea_orm(
        belongs_to = "super::fuel_type::Entity",
        from = "Column::FuelTypeId",
        to = "super::fuel_type::Column::Id"
    )]
    FuelType,
}

impl Related<super::fuel_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FuelType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
