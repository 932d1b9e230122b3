//! Data access layer repositories.
//!
//! Repositories are the only code issuing queries. Every query over products, labels,
//! templates and cook listings is filtered on the caller's organization id, so rows of
//! other organizations are never returned or modified.

pub mod label;
pub mod organization;
pub mod product;
pub mod profile;
pub mod template;
