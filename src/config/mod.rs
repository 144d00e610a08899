/// Database connection and table creation
pub mod database;

/// Seed data loading from fleet.toml
pub mod fleet;

/// Server settings from environment variables
pub mod server;
