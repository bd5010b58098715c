//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `chi` - Pure domain services for Five-Element room analysis

pub mod chi;
pub mod foundation;
