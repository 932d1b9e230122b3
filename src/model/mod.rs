//! Models shared between the server and the client.
//!
//! Besides the API DTOs, this module holds the pure domain rules of the application:
//! expiration classification, analytics aggregation, template defaults, printer command
//! generation, QR payloads and form validation. Both sides of the application use these
//! so a label is classified and validated the same way in the browser and on the server.

pub mod analytics;
pub mod api;
pub mod label;
pub mod print;
pub mod product;
pub mod qr;
pub mod template;
pub mod user;
pub mod validation;
