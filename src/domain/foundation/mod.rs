//! Foundation module - Shared domain primitives.
//!
//! Value objects and error types shared across the Chi Scan domain.

mod errors;
mod percentage;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use percentage::Percentage;
