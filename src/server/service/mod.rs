//! Service layer for business logic.
//!
//! Services validate input with the shared `model::validation` rules, apply the domain rules
//! from `model`, and coordinate the organization-scoped repositories. Every operation on
//! kitchen data takes the caller's organization id, which controllers read from the
//! authenticated profile.

pub mod auth;
pub mod bootstrap;
pub mod label;
pub mod product;
pub mod template;
pub mod user;
