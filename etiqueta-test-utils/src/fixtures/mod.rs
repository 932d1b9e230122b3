//! Test fixture modules.
//!
//! - `kitchen` - Database records for organizations, profiles, products, labels and templates
//! - `factory` - In-memory models and DTOs that don't touch the database

pub mod factory;
pub mod kitchen;
