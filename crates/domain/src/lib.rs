//! Shared domain models for the home price estimation service.
//!
//! Pure data definitions only: configuration structs and service-wide
//! constants. No I/O, no business logic.

pub mod config;
pub mod constants;
