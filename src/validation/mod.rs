//! Input validation

pub mod data;

pub use data::{CoordinateValidator, CoordinateIssue};
