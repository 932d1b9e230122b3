//! Helpers shared by the controllers.
//!
//! Resolves the signed-in profile from the session for protected endpoints and enforces
//! the admin role on cook management routes.

pub mod get_user;
