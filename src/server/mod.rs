//! Server application core modules.
//!
//! This module contains all server-side functionality for Etiqueta: the HTTP API, PIN
//! authentication, sessions, and the organization-scoped storage of labels, products, cook
//! profiles and label templates. Requests flow from controllers through services to the
//! repositories in [`data`], which are the only code touching the database.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
