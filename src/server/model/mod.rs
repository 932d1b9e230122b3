//! Server application models and type definitions.
//!
//! This module contains the application state shared by every handler, database model
//! type aliases with their DTO conversions, and the typed wrappers around session data.

pub mod app;
pub mod db;
pub mod session;
