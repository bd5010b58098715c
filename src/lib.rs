//! Chi Scan - Feng Shui room analyzer
//!
//! Maps the dominant colors of a room photo and the room's compass
//! orientation to a Five-Element profile, a 0-100 chi score, and decor
//! recommendations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
