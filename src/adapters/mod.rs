//! Adapters - Connect the application layer to the outside world.
//!
//! - `http` - Axum REST API

pub mod http;
