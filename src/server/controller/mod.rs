//! HTTP controller endpoints for the Etiqueta web API.
//!
//! Axum handlers for PIN authentication, the product catalog, food labels, printing,
//! analytics, cook management and label templates. Controllers resolve the signed-in profile
//! from the session, call the services with the profile's organization, and return JSON.
//! Every handler is documented for the OpenAPI spec with utoipa.

pub mod analytics;
pub mod auth;
pub mod label;
pub mod printer;
pub mod product;
pub mod template;
pub mod user;
pub mod util;
