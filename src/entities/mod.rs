//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod fuel_type;
pub mod vehicle;

// Re-export specific types to avoid conflicts
pub use fuel_type::{Column as FuelTypeColumn, Entity as FuelType, Model as FuelTypeModel};
pub use vehicle::{Column as VehicleColumn, Entity as Vehicle, Model as VehicleModel};
