//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for session data storage and retrieval using
//! tower-sessions. The session store is Valkey-backed in production and in-memory in tests.

pub mod user;
