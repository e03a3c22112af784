//! Core types and constants for the geospatial overlay system

pub mod types;
pub mod constants;
pub mod landmarks;

pub use types::*;
pub use constants::*;
